// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: status body, thumbnail grid, load-more and overlay.

use super::component::{Message, State};
use super::images::{ImageCache, ImageSlot};
use crate::application::port::SearchError;
use crate::domain::search::{ImageRecord, Status};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{
    button, image, mouse_area, opaque, scrollable, text, Column, Container, Id, Row,
    Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Widget id of the gallery scrollable, target of the scroll-to-end operation.
pub const GALLERY_SCROLLABLE_ID: &str = "image-gallery";

/// Data the gallery view borrows from the application.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Renders the gallery body with the overlay stacked on top when it is open.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = match state.status() {
        Status::Idle => hint(ctx.i18n.tr("gallery-empty-hint")),
        Status::Pending => centered(spinner(state)),
        Status::Resolved => results(state, ctx),
        Status::Rejected => rejected(state, ctx),
    };

    if state.overlay().is_visible() {
        Stack::new().push(body).push(overlay(state, ctx)).into()
    } else {
        body
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn hint<'a>(message: String) -> Element<'a, Message> {
    centered(
        Container::new(Text::new(message).size(typography::TITLE_SM))
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
}

fn spinner<'a>(state: &State) -> Element<'a, Message> {
    Spinner::new(palette::PRIMARY_500, state.spinner_rotation()).into_element()
}

/// Thumbnails followed by the load-more control.
///
/// A failed "load more" keeps the accumulated results on screen, so the
/// rejected body reuses this with the error banner at the bottom.
fn results<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let grid = Row::with_children(
        state
            .images()
            .iter()
            .map(|record| thumbnail(record, ctx)),
    )
    .spacing(spacing::MD)
    .wrap()
    .vertical_spacing(spacing::MD);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(grid);

    match state.status() {
        Status::Resolved => content = content.push(load_more(state, ctx.i18n)),
        Status::Rejected => {
            if let Some(err) = state.error() {
                content = content.push(error_banner(err, state.show_error_details(), ctx.i18n));
            }
        }
        Status::Idle | Status::Pending => {}
    }

    scrollable(content)
        .id(Id::new(GALLERY_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn rejected<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !state.images().is_empty() {
        return results(state, ctx);
    }

    match state.error() {
        Some(err) => centered(error_banner(err, state.show_error_details(), ctx.i18n)),
        None => hint(ctx.i18n.tr("gallery-empty-hint")),
    }
}

fn thumbnail<'a>(record: &'a ImageRecord, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match ctx.images.slot(&record.thumbnail_url) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => placeholder(
            Text::new(ctx.i18n.tr("gallery-image-failed")).size(typography::CAPTION),
        ),
        Some(ImageSlot::Loading) | None => {
            placeholder(Text::new(record.tags.as_str()).size(typography::CAPTION))
        }
    };

    button(inner)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailClicked {
            full_size_url: record.full_size_url.clone(),
            alt: record.tags.clone(),
        })
        .into()
}

fn placeholder<'a>(label: Text<'a>) -> Element<'a, Message> {
    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn load_more<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let loading = state.is_loading_more();
    let label = if loading {
        i18n.tr("gallery-loading")
    } else {
        i18n.tr("gallery-load-more")
    };

    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe((!loading).then_some(Message::LoadMore))
        .into()
}

fn error_banner<'a>(err: &SearchError, show_details: bool, i18n: &I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr(err.i18n_key())).size(typography::TITLE_SM));

    // The friendly text already says everything for an empty result.
    if *err != SearchError::NothingFound {
        let toggle_key = if show_details {
            "error-details-hide"
        } else {
            "error-details-show"
        };
        content = content.push(
            button(Text::new(i18n.tr(toggle_key)).size(typography::CAPTION))
                .style(styles::button::link)
                .on_press(Message::ToggleErrorDetails),
        );
        if show_details {
            content = content.push(
                text(err.to_string())
                    .size(typography::CAPTION)
                    .width(Length::Fill),
            );
        }
    }

    Container::new(content)
        .padding(spacing::MD)
        .max_width(sizing::SEARCH_BAR_MAX_WIDTH)
        .style(styles::container::error_banner)
        .into()
}

/// Full-window overlay. Clicking the backdrop closes it; the image swallows
/// its own clicks.
fn overlay<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let current = state.overlay();

    let picture: Element<'a, Message> = match ctx.images.slot(current.full_size_url()) {
        Some(ImageSlot::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::FillPortion(9))
            .height(Length::FillPortion(9))
            .into(),
        Some(ImageSlot::Failed) => Text::new(ctx.i18n.tr("gallery-image-failed"))
            .size(typography::BODY)
            .into(),
        Some(ImageSlot::Loading) | None => spinner(state),
    };

    let caption = Text::new(current.alt()).size(typography::CAPTION);

    let close = button(Text::new(ctx.i18n.tr("overlay-close")).size(typography::BODY))
        .style(styles::button::link)
        .on_press(Message::CloseOverlay);

    let framed = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(close)
        .push(picture)
        .push(caption);

    let backdrop = mouse_area(
        Container::new(opaque(framed))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseOverlay);

    opaque(backdrop)
}
