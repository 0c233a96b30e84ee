// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery::{self, DownloadResult};
use crate::ui::notifications;
use crate::ui::search_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// A thumbnail or full-size download finished.
    ImageLoaded {
        url: String,
        result: DownloadResult,
    },
    /// Periodic tick for the spinner and toast auto-dismiss.
    Tick(Instant),
    /// Escape was pressed and nothing else consumed it.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API key. Takes precedence over `PIXABAY_API_KEY` and the config file.
    pub api_key: Option<String>,
    /// Optional query searched right after startup.
    pub query: Option<String>,
}
