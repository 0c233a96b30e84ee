// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search**: Pixabay endpoint and query parameters
//! - **Gallery**: Image cache sizing

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Pixabay REST endpoint.
pub const DEFAULT_API_URL: &str = "https://pixabay.com/api/";

/// Environment variable holding the Pixabay API key.
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

/// Default number of hits per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Default `image_type` filter.
pub const DEFAULT_IMAGE_TYPE: &str = "photo";

/// Default `orientation` filter.
pub const DEFAULT_ORIENTATION: &str = "horizontal";

/// Request timeout for API and image downloads (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of full-size images kept in memory. Thumbnails of the current
/// results are always kept.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 32;

/// Minimum full-size image cache capacity.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 4;

/// Maximum full-size image cache capacity.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 512;
