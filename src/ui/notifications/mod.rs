// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! Used for configuration warnings, blank search submissions and image
//! download failures. Search failures themselves are shown by the gallery's
//! error banner, not as toasts.
//!
//! - [`notification`]: `Notification` with severity and i18n key
//! - [`manager`]: `Manager` queue, coalescing and auto-dismiss
//! - [`toast`]: rendering
//!
//! At most three toasts are visible; further ones wait in a queue. A toast
//! pushed while an identical one is visible refreshes it instead of stacking.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
