// SPDX-License-Identifier: MPL-2.0
//! Search newtypes.
//!
//! Type-safe wrappers for pagination values and search terms, so the
//! controller never has to re-validate them.

use std::fmt;

// =============================================================================
// Page
// =============================================================================

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Page(u32);

impl Page {
    /// The first page of every query.
    pub const FIRST: Page = Page(1);

    /// Creates a page, treating 0 as the first page.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns whether this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PerPage
// =============================================================================

/// Results requested per page. Pixabay accepts 3 to 200.
pub mod per_page_bounds {
    /// Minimum page size accepted by the API.
    pub const MIN: u32 = 3;
    /// Maximum page size accepted by the API.
    pub const MAX: u32 = 200;
    /// Default page size.
    pub const DEFAULT: u32 = 12;
}

/// Page size, guaranteed to be within the API's accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerPage(u32);

impl PerPage {
    /// Creates a page size, clamping to the accepted range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(per_page_bounds::MIN, per_page_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self(per_page_bounds::DEFAULT)
    }
}

// =============================================================================
// SearchQuery
// =============================================================================

/// A trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trims the input and returns `None` when nothing is left.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
