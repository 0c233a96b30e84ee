// SPDX-License-Identifier: MPL-2.0
//! Domain layer: search value types with no I/O.
//!
//! # Modules
//!
//! - [`search`]: [`SearchQuery`](search::SearchQuery), [`Page`](search::Page),
//!   [`PerPage`](search::PerPage), [`ImageRecord`](search::ImageRecord),
//!   [`Status`](search::Status)

pub mod search;
