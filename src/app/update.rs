// SPDX-License-Identifier: MPL-2.0
//! Message handlers and effect-to-task translation.
//!
//! Components return effects; this module is the only place that turns them
//! into `Task`s (provider calls, image downloads, scroll operations).

use super::Message;
use crate::application::port::SearchProvider;
use crate::infrastructure::ImageDownloader;
use crate::ui::gallery::{self, ImageCache, GALLERY_SCROLLABLE_ID};
use crate::ui::notifications::{self, Notification};
use crate::ui::search_bar;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub search_bar: &'a mut search_bar::State,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
    pub provider: &'a Arc<dyn SearchProvider>,
    pub downloader: &'a ImageDownloader,
}

pub fn handle_search_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: search_bar::Message,
) -> Task<Message> {
    match ctx.search_bar.handle(message) {
        search_bar::Effect::None => Task::none(),
        search_bar::Effect::Search(query) => {
            handle_gallery_message(ctx, gallery::Message::QueryChanged(query))
        }
        search_bar::Effect::EmptyQuery => {
            ctx.notifications
                .push(Notification::warning("notification-empty-query"));
            Task::none()
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.handle(message);
    run_gallery_effect(ctx, effect)
}

fn run_gallery_effect(ctx: &mut UpdateContext<'_>, effect: gallery::Effect) -> Task<Message> {
    match effect {
        gallery::Effect::None => Task::none(),
        gallery::Effect::Fetch { tag, request } => {
            tracing::info!(
                query = %request.query,
                page = %request.page,
                generation = tag.generation(),
                "fetching page"
            );
            if tag.page().is_first() {
                ctx.images.clear_thumbnails();
            }
            Task::perform(ctx.provider.search(request), move |result| {
                Message::Gallery(gallery::Message::PageLoaded { tag, result })
            })
        }
        gallery::Effect::Appended {
            records,
            scroll_to_bottom,
        } => {
            // The whole result set, so any thumbnail without a slot is requested.
            let fresh = ctx.images.begin_thumbnails(
                ctx.gallery
                    .images()
                    .iter()
                    .map(|record| record.thumbnail_url.as_str()),
            );
            tracing::debug!(
                appended = records.len(),
                downloads = fresh.len(),
                "requesting thumbnails"
            );
            let downloads = spawn_downloads(ctx.downloader, fresh);

            if scroll_to_bottom {
                // Queued after the append, so it applies to the grown layout.
                let scroll =
                    operation::snap_to(Id::new(GALLERY_SCROLLABLE_ID), RelativeOffset::END);
                Task::batch([scroll, downloads])
            } else {
                downloads
            }
        }
        gallery::Effect::OverlayOpened { full_size_url } => {
            if ctx.images.begin_full_size(&full_size_url) {
                spawn_downloads(ctx.downloader, [full_size_url])
            } else {
                Task::none()
            }
        }
    }
}

fn spawn_downloads(
    downloader: &ImageDownloader,
    urls: impl IntoIterator<Item = String>,
) -> Task<Message> {
    Task::batch(urls.into_iter().map(|url| {
        Task::perform(downloader.clone().fetch(url.clone()), move |result| {
            Message::ImageLoaded { url, result }
        })
    }))
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: gallery::DownloadResult,
) -> Task<Message> {
    if ctx.images.finish(url, result).is_some() {
        ctx.notifications
            .push(Notification::warning("notification-image-load-error"));
    }
    Task::none()
}

/// Escape closes the overlay when it is open.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.overlay().is_visible() {
        handle_gallery_message(ctx, gallery::Message::CloseOverlay)
    } else {
        Task::none()
    }
}
