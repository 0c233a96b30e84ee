// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client construction and image byte downloads.

use crate::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("ImageFinder/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for API calls and image downloads.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// Downloads encoded image bytes (JPEG/PNG) for thumbnails and the overlay.
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    client: reqwest::Client,
}

impl ImageDownloader {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches the body of `url`. Errors are flattened to strings since they
    /// only end up in logs and notifications.
    pub async fn fetch(self, url: String) -> Result<Vec<u8>, String> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP status: {}", response.status()));
        }

        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        Ok(bytes.to_vec())
    }
}
