// SPDX-License-Identifier: MPL-2.0
//! Pixabay REST API client.
//!
//! Implements [`SearchProvider`] on top of `GET https://pixabay.com/api/`.
//! Only the fields the gallery renders are decoded; `total`/`totalHits` are
//! ignored since the gallery has no notion of exhaustion besides an empty page.

use crate::application::port::{SearchError, SearchProvider, SearchRequest, SearchResult};
use crate::config::SearchConfig;
use crate::domain::search::{ImageId, ImageRecord};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;

/// Response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

/// One hit. Pixabay sends many more fields; serde skips them.
#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
}

impl From<Hit> for ImageRecord {
    fn from(hit: Hit) -> Self {
        ImageRecord {
            id: ImageId(hit.id),
            thumbnail_url: hit.webformat_url,
            full_size_url: hit.large_image_url,
            tags: hit.tags,
        }
    }
}

/// Decodes a response body into records, preserving server order.
pub fn parse_response(body: &str) -> SearchResult {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(response.hits.into_iter().map(ImageRecord::from).collect())
}

/// Static query parameters taken from `[search]`.
#[derive(Debug, Clone)]
struct QueryDefaults {
    image_type: String,
    orientation: String,
    safe_search: bool,
}

/// Pixabay client. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    defaults: QueryDefaults,
}

impl PixabayClient {
    /// Creates a client from the `[search]` section and an already resolved key.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &SearchConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            defaults: QueryDefaults {
                image_type: config.image_type.clone(),
                orientation: config.orientation.clone(),
                safe_search: config.safe_search,
            },
        }
    }

    /// Builds the query string for a request (without the key).
    fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        vec![
            ("q", request.query.as_str().to_string()),
            ("page", request.page.value().to_string()),
            ("image_type", self.defaults.image_type.clone()),
            ("orientation", self.defaults.orientation.clone()),
            ("safesearch", self.defaults.safe_search.to_string()),
            ("per_page", request.per_page.value().to_string()),
        ]
    }

    async fn fetch_page(self, request: SearchRequest) -> SearchResult {
        let Some(api_key) = self.api_key.clone() else {
            return Err(SearchError::MissingApiKey);
        };

        let mut params = self.query_params(&request);
        params.push(("key", api_key));

        tracing::debug!(query = %request.query, page = %request.page, "requesting page");

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        parse_response(&body)
    }
}

impl SearchProvider for PixabayClient {
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, SearchResult> {
        self.clone().fetch_page(request).boxed()
    }
}
