// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Spinner frame and toast timer interval.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Escape key presses not captured by a widget (e.g. the focused text input).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Periodic tick while something animates: a spinner is visible or toasts
/// are waiting for auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
