// SPDX-License-Identifier: MPL-2.0
//! Image search domain types.
//!
//! - [`types`]: [`ImageRecord`](types::ImageRecord) and the search
//!   [`Status`](types::Status) lifecycle
//! - [`newtypes`]: validated values ([`Page`](newtypes::Page),
//!   [`PerPage`](newtypes::PerPage), [`SearchQuery`](newtypes::SearchQuery))

pub mod newtypes;
pub mod types;

pub use newtypes::{Page, PerPage, SearchQuery};
pub use types::{ImageId, ImageRecord, Status};
