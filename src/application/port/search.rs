// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! This module defines the [`SearchProvider`] trait the gallery uses to
//! fetch pages of results, and the [`SearchError`] it fails with.
//!
//! # Design Notes
//!
//! - The provider returns a boxed `Send` future so the caller can hand it
//!   to `Task::perform` without knowing the concrete client
//! - Pagination metadata (totals, has-more) is intentionally not part of the
//!   contract: an empty page is the only exhaustion signal

use crate::domain::search::{ImageRecord, Page, PerPage, SearchQuery};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SearchError
// =============================================================================

/// Message shown when a page comes back without any hits.
pub const NOTHING_FOUND_MESSAGE: &str = "Sorry! Nothing found";

/// Errors a search attempt can end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The provider answered with zero results.
    NothingFound,

    /// No API key was configured.
    MissingApiKey,

    /// The API answered with a non-success HTTP status.
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (Pixabay returns plain-text error descriptions).
        body: String,
    },

    /// The request could not be sent or the connection failed.
    Network(String),

    /// The response body could not be decoded.
    Decode(String),
}

impl SearchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::NothingFound => "error-search-nothing-found",
            SearchError::MissingApiKey => "error-search-missing-key",
            SearchError::Http { .. } => "error-search-http",
            SearchError::Network(_) => "error-search-network",
            SearchError::Decode(_) => "error-search-decode",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NothingFound => f.write_str(NOTHING_FOUND_MESSAGE),
            SearchError::MissingApiKey => write!(f, "No Pixabay API key configured"),
            SearchError::Http { status, body } if body.is_empty() => {
                write!(f, "Request failed with status code {status}")
            }
            SearchError::Http { status, body } => {
                write!(f, "Request failed with status code {status}: {body}")
            }
            SearchError::Network(msg) => write!(f, "Network error: {msg}"),
            SearchError::Decode(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

// =============================================================================
// SearchRequest
// =============================================================================

/// One page request for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub page: Page,
    pub per_page: PerPage,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: SearchQuery, page: Page, per_page: PerPage) -> Self {
        Self {
            query,
            page,
            per_page,
        }
    }
}

// =============================================================================
// SearchProvider
// =============================================================================

/// Result of a single page fetch.
pub type SearchResult = Result<Vec<ImageRecord>, SearchError>;

/// Fetches pages of image records for a query.
///
/// Implementations must be cheap to share behind an `Arc`; the returned
/// future must not borrow `self`.
pub trait SearchProvider: Send + Sync {
    /// Requests one page. An empty `Ok` vector means the query has no
    /// (more) results.
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, SearchResult>;
}
