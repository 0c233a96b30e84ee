// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping external services.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Pixabay REST API client (implements [`SearchProvider`])
//! - [`http`]: Shared HTTP client and raw image downloads
//!
//! [`SearchProvider`]: crate::application::port::SearchProvider

pub mod http;
pub mod pixabay;

pub use http::ImageDownloader;
pub use pixabay::PixabayClient;
