// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the gallery controller stays
//! independent of the HTTP client that backs it.
//!
//! # Available Ports
//!
//! - [`search`]: Paginated image search

pub mod search;

pub use search::{
    SearchError, SearchProvider, SearchRequest, SearchResult, NOTHING_FOUND_MESSAGE,
};
