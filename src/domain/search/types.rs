// SPDX-License-Identifier: MPL-2.0
//! Image records and search status.

use std::fmt;

/// Identifier of an image, unique within one result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single search hit. Immutable once received from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Provider identifier.
    pub id: ImageId,
    /// URL of the gallery-sized preview.
    pub thumbnail_url: String,
    /// URL of the large image shown in the overlay.
    pub full_size_url: String,
    /// Comma separated tags, used as alt text.
    pub tags: String,
}

/// Lifecycle phase of the current search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No query has been submitted yet.
    #[default]
    Idle,
    /// First page of a query is in flight.
    Pending,
    /// At least one non-empty page has been received.
    Resolved,
    /// The last fetch failed or came back empty.
    Rejected,
}
