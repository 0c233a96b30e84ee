// SPDX-License-Identifier: MPL-2.0
//! Downloaded image handles keyed by URL.
//!
//! Thumbnails and full-size images are fetched over HTTP and turned into
//! Iced image handles. The cache remembers in-flight downloads so the same
//! URL is never requested twice concurrently.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Load state of a single URL.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Download in progress.
    Loading,
    /// Bytes arrived and were wrapped in a handle.
    Ready(Handle),
    /// Download failed.
    Failed,
}

/// Outcome of a finished download, as reported back to the cache.
pub type DownloadResult = Result<Vec<u8>, String>;

/// Image slots for the gallery.
///
/// Thumbnails of the current result set are pinned: they stay until the
/// next query replaces the results. Full-size images opened in the overlay
/// live in a bounded LRU.
pub struct ImageCache {
    thumbnails: HashMap<String, ImageSlot>,
    full_size: LruCache<String, ImageSlot>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("thumbnails", &self.thumbnails.len())
            .field("full_size", &self.full_size.len())
            .field("full_size_capacity", &self.full_size.cap())
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` full-size images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            thumbnails: HashMap::new(),
            full_size: LruCache::new(capacity),
        }
    }

    /// Marks the thumbnails without a slot as loading and returns them.
    ///
    /// Thumbnails already loading, ready or failed are skipped, so this can
    /// be called with the whole result set after every append.
    pub fn begin_thumbnails<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fresh = Vec::new();
        for url in urls {
            if !self.thumbnails.contains_key(url) {
                self.thumbnails.insert(url.to_owned(), ImageSlot::Loading);
                fresh.push(url.to_owned());
            }
        }
        fresh
    }

    /// Drops every thumbnail, ahead of a new result set.
    pub fn clear_thumbnails(&mut self) {
        self.thumbnails.clear();
    }

    /// Marks a full-size image as loading.
    ///
    /// Returns `true` when the caller should start a download: the URL is
    /// unknown, was evicted, or failed previously.
    pub fn begin_full_size(&mut self, url: &str) -> bool {
        match self.full_size.get(url) {
            Some(ImageSlot::Loading | ImageSlot::Ready(_)) => false,
            Some(ImageSlot::Failed) | None => {
                self.full_size.put(url.to_owned(), ImageSlot::Loading);
                true
            }
        }
    }

    /// Stores the result of a download.
    ///
    /// Returns the error message when the download failed. Results for URLs
    /// the cache no longer tracks (a thumbnail of replaced results, an evicted
    /// full-size image) are dropped.
    pub fn finish(&mut self, url: String, result: DownloadResult) -> Option<String> {
        let (slot, error) = match result {
            Ok(bytes) => (ImageSlot::Ready(Handle::from_bytes(bytes)), None),
            Err(message) => (ImageSlot::Failed, Some(message)),
        };

        if let Some(existing) = self.thumbnails.get_mut(&url) {
            *existing = slot;
        } else if let Some(existing) = self.full_size.peek_mut(&url) {
            *existing = slot;
        } else {
            tracing::debug!(url = %url, "dropping download for an untracked image");
            return None;
        }

        if let Some(message) = &error {
            tracing::warn!(url = %url, error = %message, "image download failed");
        }
        error
    }

    /// Current slot for `url`, without touching the LRU order.
    #[must_use]
    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.thumbnails
            .get(url)
            .or_else(|| self.full_size.peek(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_ready(cache: &ImageCache, url: &str) -> bool {
        matches!(cache.slot(url), Some(ImageSlot::Ready(_)))
    }

    #[test]
    fn thumbnails_start_only_once() {
        let mut cache = ImageCache::new(8);
        assert_eq!(cache.begin_thumbnails(["a", "b", "a"]), vec!["a", "b"]);
        assert!(cache.begin_thumbnails(["a", "b"]).is_empty());
        assert!(matches!(cache.slot("a"), Some(ImageSlot::Loading)));
    }

    #[test]
    fn thumbnails_outlive_the_full_size_capacity() {
        let urls: Vec<String> = (0..40).map(|i| format!("thumb-{i}")).collect();
        let mut cache = ImageCache::new(1);

        let fresh = cache.begin_thumbnails(urls.iter().map(String::as_str));
        for url in fresh {
            assert!(cache.finish(url, Ok(vec![1])).is_none());
        }
        assert!(cache.begin_full_size("full-a"));
        assert!(cache.begin_full_size("full-b"));

        assert!(urls.iter().all(|url| is_ready(&cache, url)));
    }

    #[test]
    fn failed_thumbnails_are_not_requested_again() {
        let mut cache = ImageCache::new(8);
        cache.begin_thumbnails(["a"]);
        let err = cache.finish("a".into(), Err("404".into()));

        assert_eq!(err.as_deref(), Some("404"));
        assert!(matches!(cache.slot("a"), Some(ImageSlot::Failed)));
        assert!(cache.begin_thumbnails(["a"]).is_empty());
    }

    #[test]
    fn cleared_thumbnails_are_requested_again() {
        let mut cache = ImageCache::new(8);
        cache.begin_thumbnails(["a"]);
        cache.clear_thumbnails();

        assert!(cache.slot("a").is_none());
        assert_eq!(cache.begin_thumbnails(["a"]), vec!["a"]);
    }

    #[test]
    fn late_thumbnail_after_clear_is_dropped() {
        let mut cache = ImageCache::new(8);
        cache.begin_thumbnails(["a"]);
        cache.clear_thumbnails();

        assert!(cache.finish("a".into(), Err("404".into())).is_none());
        assert!(cache.slot("a").is_none());
    }

    #[test]
    fn full_size_ready_is_not_downloaded_again() {
        let mut cache = ImageCache::new(8);
        assert!(cache.begin_full_size("a"));
        assert!(!cache.begin_full_size("a"));
        assert!(cache.finish("a".into(), Ok(vec![1, 2, 3])).is_none());

        assert!(is_ready(&cache, "a"));
        assert!(!cache.begin_full_size("a"));
    }

    #[test]
    fn failed_full_size_can_be_retried() {
        let mut cache = ImageCache::new(8);
        cache.begin_full_size("a");
        cache.finish("a".into(), Err("timeout".into()));

        assert!(cache.begin_full_size("a"));
    }

    #[test]
    fn least_recently_used_full_size_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.begin_full_size("a");
        cache.begin_full_size("b");
        cache.begin_full_size("c");

        assert!(cache.slot("a").is_none());
        assert!(cache.begin_full_size("a"));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut cache = ImageCache::new(0);
        assert!(cache.begin_full_size("a"));
        assert!(cache.slot("a").is_some());
    }
}
