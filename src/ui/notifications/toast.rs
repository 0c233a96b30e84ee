// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let mut message = i18n.tr(notification.message_key());
        if notification.repeats() > 1 {
            message = format!("{message} (×{})", notification.repeats());
        }

        let marker = Container::new(
            Text::new(severity.glyph())
                .size(typography::BODY)
                .color(accent),
        )
        .width(Length::Fixed(sizing::ICON_SM))
        .align_x(alignment::Horizontal::Center);

        let dismiss = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::link);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(marker)
            .push(
                Container::new(Text::new(message).size(typography::BODY)).width(Length::Fill),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Visible toasts stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let mut column = Column::with_children(manager.visible().map(|n| Self::view(n, i18n)))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        let queued = manager.queued_count();
        if queued > 0 {
            let count = queued.to_string();
            column = column.push(
                Text::new(i18n.tr_with_args("notification-queued", &[("count", count.as_str())]))
                    .size(typography::CAPTION),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
