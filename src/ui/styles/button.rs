// SPDX-License-Identifier: MPL-2.0
//! Button styles for the search bar, thumbnails and load-more control.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (search submit, load more).
///
/// The disabled variant is used while a "load more" fetch is running.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let brand = |bg: Color, edge: Color, shadow| button::Style {
        background: Some(Background::Color(bg)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            brand(palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => brand(palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => {
            let is_light = matches!(theme, Theme::Light);
            button::Style {
                background: Some(Background::Color(if is_light {
                    palette::GRAY_200
                } else {
                    palette::GRAY_900
                })),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}

/// Thumbnail cell: borderless until hovered, then outlined in the brand color.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let surface = theme.extended_palette().background.weak.color;

    let (edge, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_500, shadow::MD),
        _ => (Color::TRANSPARENT, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(surface)),
        text_color: theme.palette().text,
        border: Border {
            color: edge,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Flat text button used for "show details" and toast dismissal.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            }
        } else {
            text
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
