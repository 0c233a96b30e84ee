// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: search state, pagination and the fetch lifecycle.
//!
//! The controller never performs I/O. Every side effect is returned as an
//! [`Effect`] that the application turns into an Iced `Task`:
//!
//! - [`Effect::Fetch`] runs the request through the search provider and
//!   feeds the outcome back as [`Message::PageLoaded`]
//! - [`Effect::Appended`] loads the thumbnails still missing and, after a
//!   "load more", scrolls the gallery to its end
//! - [`Effect::OverlayOpened`] loads the full-size image
//!
//! Each fetch carries a [`FetchTag`]. A query change bumps the generation, so
//! a completion issued for an older query is dropped instead of overwriting
//! newer results.

use super::overlay;
use crate::application::port::{SearchError, SearchRequest, SearchResult};
use crate::domain::search::{ImageRecord, Page, PerPage, SearchQuery, Status};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.15;

/// Identifies the query generation and page a fetch was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTag {
    generation: u64,
    page: Page,
}

impl FetchTag {
    #[must_use]
    pub fn page(self) -> Page {
        self.page
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Messages for the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The externally owned query was submitted.
    QueryChanged(SearchQuery),
    /// The user asked for the next page.
    LoadMore,
    /// A fetch finished.
    PageLoaded { tag: FetchTag, result: SearchResult },
    /// A thumbnail was clicked.
    ThumbnailClicked { full_size_url: String, alt: String },
    /// The overlay was dismissed.
    CloseOverlay,
    /// Show or hide the technical error details.
    ToggleErrorDetails,
    /// Animate the loading spinner.
    SpinnerTick,
}

/// Side effects requested by the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Run this request and report back with `tag`.
    Fetch {
        tag: FetchTag,
        request: SearchRequest,
    },
    /// Records were appended to the result set.
    Appended {
        records: Vec<ImageRecord>,
        scroll_to_bottom: bool,
    },
    /// The overlay opened on this image.
    OverlayOpened { full_size_url: String },
}

/// Treats a successful but empty page as a failure.
///
/// Kept on its own so the "zero results is an error" rule can change
/// without touching provider failure handling.
#[must_use]
pub fn empty_page_policy(result: SearchResult) -> SearchResult {
    match result {
        Ok(records) if records.is_empty() => Err(SearchError::NothingFound),
        other => other,
    }
}

/// Gallery state.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: Option<SearchQuery>,
    page: Page,
    images: Vec<ImageRecord>,
    status: Status,
    error: Option<SearchError>,
    overlay: overlay::State,
    per_page: PerPage,
    generation: u64,
    in_flight: Option<FetchTag>,
    scroll_on_append: bool,
    show_error_details: bool,
    spinner_rotation: f32,
}

impl State {
    /// Creates an idle gallery requesting `per_page` results per page.
    #[must_use]
    pub fn new(per_page: PerPage) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::QueryChanged(query) => self.set_query(query),
            Message::LoadMore => self.load_more(),
            Message::PageLoaded { tag, result } => self.page_loaded(tag, result),
            Message::ThumbnailClicked { full_size_url, alt } => {
                match self
                    .overlay
                    .handle(overlay::Message::Open { full_size_url, alt })
                {
                    overlay::Effect::Opened { full_size_url } => {
                        Effect::OverlayOpened { full_size_url }
                    }
                    overlay::Effect::None => Effect::None,
                }
            }
            Message::CloseOverlay => {
                self.overlay.handle(overlay::Message::Close);
                Effect::None
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
                Effect::None
            }
            Message::SpinnerTick => {
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                Effect::None
            }
        }
    }

    /// Resets accumulated state and fetches page 1, unless the query is unchanged.
    fn set_query(&mut self, query: SearchQuery) -> Effect {
        if self.query.as_ref() == Some(&query) {
            return Effect::None;
        }

        tracing::info!(query = %query, "new search");

        self.query = Some(query);
        self.page = Page::FIRST;
        self.images.clear();
        self.error = None;
        self.show_error_details = false;
        self.scroll_on_append = false;
        self.status = Status::Pending;
        self.generation += 1;

        self.issue_fetch()
    }

    fn load_more(&mut self) -> Effect {
        if self.status != Status::Resolved || self.in_flight.is_some() {
            return Effect::None;
        }

        self.page = self.page.next();
        self.scroll_on_append = true;
        self.issue_fetch()
    }

    fn issue_fetch(&mut self) -> Effect {
        let Some(query) = self.query.clone() else {
            return Effect::None;
        };

        let tag = FetchTag {
            generation: self.generation,
            page: self.page,
        };
        self.in_flight = Some(tag);

        Effect::Fetch {
            tag,
            request: SearchRequest::new(query, self.page, self.per_page),
        }
    }

    fn page_loaded(&mut self, tag: FetchTag, result: SearchResult) -> Effect {
        if self.in_flight != Some(tag) {
            tracing::debug!(
                generation = tag.generation,
                page = %tag.page,
                current = self.generation,
                "discarding stale page"
            );
            return Effect::None;
        }
        self.in_flight = None;

        match empty_page_policy(result) {
            Ok(records) => {
                tracing::debug!(page = %tag.page, count = records.len(), "page appended");
                self.images.extend(records.iter().cloned());
                self.status = Status::Resolved;
                Effect::Appended {
                    records,
                    scroll_to_bottom: std::mem::take(&mut self.scroll_on_append),
                }
            }
            Err(err) => {
                tracing::warn!(page = %tag.page, error = %err, "search failed");
                self.error = Some(err);
                self.status = Status::Rejected;
                self.scroll_on_append = false;
                Effect::None
            }
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::State {
        &self.overlay
    }

    /// Whether a "load more" fetch is currently running.
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.status == Status::Resolved && self.in_flight.is_some()
    }

    /// Whether any fetch is running (first page or load more).
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn show_error_details(&self) -> bool {
        self.show_error_details
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::ImageId;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::parse(text).expect("valid query")
    }

    fn records(start: u64, count: u64) -> Vec<ImageRecord> {
        (start..start + count)
            .map(|id| ImageRecord {
                id: ImageId(id),
                thumbnail_url: format!("https://cdn.example/{id}_640.jpg"),
                full_size_url: format!("https://cdn.example/{id}_1280.jpg"),
                tags: format!("tag{id}"),
            })
            .collect()
    }

    fn expect_fetch(effect: Effect) -> (FetchTag, SearchRequest) {
        match effect {
            Effect::Fetch { tag, request } => (tag, request),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn resolved_with(count: u64) -> State {
        let mut state = State::new(PerPage::default());
        let (tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        state.handle(Message::PageLoaded {
            tag,
            result: Ok(records(0, count)),
        });
        state
    }

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = State::new(PerPage::default());
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.page(), Page::FIRST);
        assert!(state.images().is_empty());
        assert!(state.error().is_none());
        assert!(!state.overlay().is_visible());
    }

    #[test]
    fn query_change_resets_and_fetches_first_page() {
        let mut state = resolved_with(12);
        state.handle(Message::LoadMore);
        assert_eq!(state.page().value(), 2);

        let (tag, request) = expect_fetch(state.handle(Message::QueryChanged(query("dogs"))));

        assert_eq!(state.status(), Status::Pending);
        assert!(state.images().is_empty());
        assert_eq!(state.page(), Page::FIRST);
        assert_eq!(tag.page(), Page::FIRST);
        assert_eq!(request.query.as_str(), "dogs");
        assert_eq!(request.page, Page::FIRST);
    }

    #[test]
    fn same_query_is_ignored() {
        let mut state = resolved_with(12);
        let effect = state.handle(Message::QueryChanged(query("cats")));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.images().len(), 12);
        assert_eq!(state.status(), Status::Resolved);
    }

    #[test]
    fn first_page_resolves_with_records() {
        let state = resolved_with(12);
        assert_eq!(state.status(), Status::Resolved);
        assert_eq!(state.images().len(), 12);
        assert_eq!(state.page(), Page::FIRST);
        assert!(!state.is_fetching());
    }

    #[test]
    fn first_page_append_does_not_scroll() {
        let mut state = State::new(PerPage::default());
        let (tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        let effect = state.handle(Message::PageLoaded {
            tag,
            result: Ok(records(0, 3)),
        });
        assert_eq!(
            effect,
            Effect::Appended {
                records: records(0, 3),
                scroll_to_bottom: false
            }
        );
    }

    #[test]
    fn empty_first_page_is_rejected_with_nothing_found() {
        let mut state = State::new(PerPage::default());
        let (tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("zzzznomatch"))));
        state.handle(Message::PageLoaded {
            tag,
            result: Ok(Vec::new()),
        });

        assert_eq!(state.status(), Status::Rejected);
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("Sorry! Nothing found")
        );
        assert!(state.images().is_empty());
    }

    #[test]
    fn provider_failure_keeps_message() {
        let mut state = State::new(PerPage::default());
        let (tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        state.handle(Message::PageLoaded {
            tag,
            result: Err(SearchError::Network("connection refused".into())),
        });

        assert_eq!(state.status(), Status::Rejected);
        assert_eq!(
            state.error(),
            Some(&SearchError::Network("connection refused".into()))
        );
    }

    #[test]
    fn load_more_appends_and_requests_scroll() {
        let mut state = resolved_with(12);
        let (tag, request) = expect_fetch(state.handle(Message::LoadMore));
        assert_eq!(request.page.value(), 2);
        assert!(state.is_loading_more());
        assert_eq!(state.status(), Status::Resolved);

        let effect = state.handle(Message::PageLoaded {
            tag,
            result: Ok(records(12, 12)),
        });

        assert_eq!(state.images().len(), 24);
        let ids: Vec<u64> = state.images().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, (0..24).collect::<Vec<_>>());
        assert!(matches!(
            effect,
            Effect::Appended {
                scroll_to_bottom: true,
                ..
            }
        ));
    }

    #[test]
    fn load_more_failure_rejects_but_keeps_results() {
        let mut state = resolved_with(12);
        let (tag, _) = expect_fetch(state.handle(Message::LoadMore));
        state.handle(Message::PageLoaded {
            tag,
            result: Ok(Vec::new()),
        });

        assert_eq!(state.status(), Status::Rejected);
        assert_eq!(state.images().len(), 12);
        assert_eq!(state.page().value(), 2);
    }

    #[test]
    fn load_more_is_ignored_unless_resolved() {
        let mut state = State::new(PerPage::default());
        assert_eq!(state.handle(Message::LoadMore), Effect::None);
        assert_eq!(state.page(), Page::FIRST);

        state.handle(Message::QueryChanged(query("cats")));
        assert_eq!(state.handle(Message::LoadMore), Effect::None);
        assert_eq!(state.page(), Page::FIRST);
    }

    #[test]
    fn load_more_is_ignored_while_previous_page_loads() {
        let mut state = resolved_with(12);
        expect_fetch(state.handle(Message::LoadMore));
        assert_eq!(state.handle(Message::LoadMore), Effect::None);
        assert_eq!(state.page().value(), 2);
    }

    #[test]
    fn stale_completion_from_previous_query_is_dropped() {
        let mut state = State::new(PerPage::default());
        let (old_tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        let (new_tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("dogs"))));

        state.handle(Message::PageLoaded {
            tag: new_tag,
            result: Ok(records(100, 2)),
        });
        let effect = state.handle(Message::PageLoaded {
            tag: old_tag,
            result: Ok(records(0, 12)),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(state.images().len(), 2);
        assert_eq!(state.images()[0].id, ImageId(100));
        assert_eq!(state.query().map(SearchQuery::as_str), Some("dogs"));
    }

    #[test]
    fn stale_failure_does_not_reject_current_query() {
        let mut state = State::new(PerPage::default());
        let (old_tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        expect_fetch(state.handle(Message::QueryChanged(query("dogs"))));

        state.handle(Message::PageLoaded {
            tag: old_tag,
            result: Err(SearchError::Network("timeout".into())),
        });

        assert_eq!(state.status(), Status::Pending);
        assert!(state.error().is_none());
    }

    #[test]
    fn new_query_after_rejection_clears_error() {
        let mut state = State::new(PerPage::default());
        let (tag, _) = expect_fetch(state.handle(Message::QueryChanged(query("zzzz"))));
        state.handle(Message::PageLoaded {
            tag,
            result: Ok(Vec::new()),
        });
        assert_eq!(state.status(), Status::Rejected);

        expect_fetch(state.handle(Message::QueryChanged(query("cats"))));
        assert_eq!(state.status(), Status::Pending);
        assert!(state.error().is_none());
    }

    #[test]
    fn overlay_does_not_change_status() {
        let mut state = resolved_with(3);
        let effect = state.handle(Message::ThumbnailClicked {
            full_size_url: "X".into(),
            alt: "Y".into(),
        });

        assert_eq!(
            effect,
            Effect::OverlayOpened {
                full_size_url: "X".into()
            }
        );
        assert_eq!(state.status(), Status::Resolved);
        assert!(state.overlay().is_visible());

        state.handle(Message::CloseOverlay);
        assert!(!state.overlay().is_visible());
        assert_eq!(state.overlay().full_size_url(), "X");
        assert_eq!(state.status(), Status::Resolved);
    }

    #[test]
    fn empty_page_policy_only_touches_empty_success() {
        assert_eq!(
            empty_page_policy(Ok(Vec::new())),
            Err(SearchError::NothingFound)
        );
        assert_eq!(empty_page_policy(Ok(records(0, 1))), Ok(records(0, 1)));
        assert_eq!(
            empty_page_policy(Err(SearchError::MissingApiKey)),
            Err(SearchError::MissingApiKey)
        );
    }

    #[test]
    fn toggle_error_details_flips_and_resets_on_new_query() {
        let mut state = State::new(PerPage::default());
        state.handle(Message::ToggleErrorDetails);
        assert!(state.show_error_details());
        state.handle(Message::QueryChanged(query("cats")));
        assert!(!state.show_error_details());
    }

    #[test]
    fn spinner_tick_wraps_rotation() {
        let mut state = State::new(PerPage::default());
        for _ in 0..200 {
            state.handle(Message::SpinnerTick);
        }
        assert!(state.spinner_rotation() <= std::f32::consts::TAU);
        assert!(state.spinner_rotation() >= 0.0);
    }
}
