// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ImageCache};
use crate::ui::notifications::{self, Toast};
use crate::ui::search_bar;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search_bar: &'a search_bar::State,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
}

/// Search bar above the gallery, with toasts floating over both.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = gallery::view(
        ctx.gallery,
        gallery::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
        },
    )
    .map(Message::Gallery);

    let page = Column::new()
        .push(ctx.search_bar.view(ctx.i18n).map(Message::SearchBar))
        .push(
            Container::new(gallery)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
