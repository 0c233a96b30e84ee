// SPDX-License-Identifier: MPL-2.0
//! Drives the gallery controller against a scripted provider, awaiting each
//! fetch the way the application runtime would.

use futures_util::future::{BoxFuture, FutureExt};
use image_finder::application::port::{SearchError, SearchProvider, SearchRequest, SearchResult};
use image_finder::domain::search::{ImageId, ImageRecord, PerPage, SearchQuery, Status};
use image_finder::ui::gallery::{Effect, FetchTag, Message, State};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers from a fixed table keyed by (query, page); unknown pages are empty.
#[derive(Default)]
struct ScriptedProvider {
    pages: HashMap<(String, u32), SearchResult>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl ScriptedProvider {
    fn with_page(mut self, query: &str, page: u32, result: SearchResult) -> Self {
        self.pages.insert((query.to_string(), page), result);
        self
    }

    fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl SearchProvider for ScriptedProvider {
    fn search(&self, request: SearchRequest) -> BoxFuture<'static, SearchResult> {
        let key = (request.query.as_str().to_string(), request.page.value());
        let result = self.pages.get(&key).cloned().unwrap_or(Ok(Vec::new()));
        self.requests.lock().expect("lock").push(request);
        async move { result }.boxed()
    }
}

fn records(prefix: u64, count: u64) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| {
            let id = prefix * 1000 + i;
            ImageRecord {
                id: ImageId(id),
                thumbnail_url: format!("https://cdn.example/{id}_640.jpg"),
                full_size_url: format!("https://cdn.example/{id}_1280.jpg"),
                tags: format!("tag {id}"),
            }
        })
        .collect()
}

fn query(text: &str) -> SearchQuery {
    SearchQuery::parse(text).expect("valid query")
}

/// Runs every fetch the controller asks for until it settles.
async fn drive(state: &mut State, provider: &dyn SearchProvider, message: Message) -> Vec<Effect> {
    let mut effects = Vec::new();
    let mut next = Some(message);

    while let Some(message) = next.take() {
        match state.handle(message) {
            Effect::Fetch { tag, request } => {
                let result = provider.search(request).await;
                next = Some(Message::PageLoaded { tag, result });
            }
            other => effects.push(other),
        }
    }

    effects
}

fn fetch_parts(effect: Effect) -> (FetchTag, SearchRequest) {
    match effect {
        Effect::Fetch { tag, request } => (tag, request),
        other => panic!("expected a fetch, got {other:?}"),
    }
}

#[tokio::test]
async fn first_page_of_twelve_resolves() {
    let provider = ScriptedProvider::default().with_page("cats", 1, Ok(records(1, 12)));
    let mut state = State::new(PerPage::default());

    let effects = drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;

    assert_eq!(state.status(), Status::Resolved);
    assert_eq!(state.images().len(), 12);
    assert!(matches!(
        effects.as_slice(),
        [Effect::Appended {
            scroll_to_bottom: false,
            ..
        }]
    ));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].page.value(), 1);
    assert_eq!(requests[0].per_page.value(), 12);
}

#[tokio::test]
async fn no_match_rejects_with_nothing_found() {
    let provider = ScriptedProvider::default();
    let mut state = State::new(PerPage::default());

    drive(&mut state, &provider, Message::QueryChanged(query("zzzznomatch"))).await;

    assert_eq!(state.status(), Status::Rejected);
    assert_eq!(state.error(), Some(&SearchError::NothingFound));
    assert_eq!(
        state.error().map(ToString::to_string).as_deref(),
        Some("Sorry! Nothing found")
    );
}

#[tokio::test]
async fn load_more_grows_to_twenty_four_in_order_and_scrolls() {
    let provider = ScriptedProvider::default()
        .with_page("cats", 1, Ok(records(1, 12)))
        .with_page("cats", 2, Ok(records(2, 12)));
    let mut state = State::new(PerPage::default());

    drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;
    let effects = drive(&mut state, &provider, Message::LoadMore).await;

    assert_eq!(state.images().len(), 24);
    assert_eq!(state.page().value(), 2);
    let mut expected = records(1, 12);
    expected.extend(records(2, 12));
    assert_eq!(state.images(), expected.as_slice());
    assert!(matches!(
        effects.as_slice(),
        [Effect::Appended {
            scroll_to_bottom: true,
            ..
        }]
    ));
}

#[tokio::test]
async fn exhausted_results_keep_accumulated_images() {
    let provider = ScriptedProvider::default().with_page("cats", 1, Ok(records(1, 5)));
    let mut state = State::new(PerPage::default());

    drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;
    drive(&mut state, &provider, Message::LoadMore).await;

    assert_eq!(state.status(), Status::Rejected);
    assert_eq!(state.images().len(), 5);
}

#[tokio::test]
async fn provider_failure_message_is_kept() {
    let provider = ScriptedProvider::default().with_page(
        "cats",
        1,
        Err(SearchError::Http {
            status: 400,
            body: "[ERROR 400] \"page\" is out of valid range.".into(),
        }),
    );
    let mut state = State::new(PerPage::default());

    drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;

    assert_eq!(state.status(), Status::Rejected);
    let message = state.error().map(ToString::to_string).unwrap_or_default();
    assert!(message.starts_with("Request failed with status code 400"));
}

#[tokio::test]
async fn slow_response_for_previous_query_cannot_overwrite_new_results() {
    let provider = ScriptedProvider::default()
        .with_page("cats", 1, Ok(records(1, 12)))
        .with_page("dogs", 1, Ok(records(2, 3)));
    let mut state = State::new(PerPage::default());

    let (cats_tag, cats_request) = fetch_parts(state.handle(Message::QueryChanged(query("cats"))));
    let (dogs_tag, dogs_request) = fetch_parts(state.handle(Message::QueryChanged(query("dogs"))));

    // The newer query answers first, the older one arrives late.
    let dogs = provider.search(dogs_request).await;
    state.handle(Message::PageLoaded {
        tag: dogs_tag,
        result: dogs,
    });
    let cats = provider.search(cats_request).await;
    let late = state.handle(Message::PageLoaded {
        tag: cats_tag,
        result: cats,
    });

    assert_eq!(late, Effect::None);
    assert_eq!(state.status(), Status::Resolved);
    assert_eq!(state.images(), records(2, 3).as_slice());
}

#[tokio::test]
async fn each_load_more_requests_exactly_the_next_page() {
    let provider = ScriptedProvider::default()
        .with_page("cats", 1, Ok(records(1, 12)))
        .with_page("cats", 2, Ok(records(2, 12)))
        .with_page("cats", 3, Ok(records(3, 12)));
    let mut state = State::new(PerPage::new(12));

    drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;
    drive(&mut state, &provider, Message::LoadMore).await;
    drive(&mut state, &provider, Message::LoadMore).await;

    let pages: Vec<u32> = provider
        .requests()
        .iter()
        .map(|request| request.page.value())
        .collect();
    assert_eq!(pages, vec![1, 2, 3]);
    assert_eq!(state.images().len(), 36);
}

#[tokio::test]
async fn overlay_survives_a_new_search() {
    let provider = ScriptedProvider::default()
        .with_page("cats", 1, Ok(records(1, 2)))
        .with_page("dogs", 1, Ok(records(2, 2)));
    let mut state = State::new(PerPage::default());

    drive(&mut state, &provider, Message::QueryChanged(query("cats"))).await;
    let first = state.images()[0].clone();
    let effects = drive(
        &mut state,
        &provider,
        Message::ThumbnailClicked {
            full_size_url: first.full_size_url.clone(),
            alt: first.tags.clone(),
        },
    )
    .await;
    assert_eq!(
        effects,
        vec![Effect::OverlayOpened {
            full_size_url: first.full_size_url.clone()
        }]
    );

    drive(&mut state, &provider, Message::QueryChanged(query("dogs"))).await;

    assert!(state.overlay().is_visible());
    assert_eq!(state.overlay().full_size_url(), first.full_size_url);
    assert_eq!(state.overlay().alt(), first.tags);
}

#[tokio::test]
async fn shared_provider_works_behind_arc() {
    let provider: Arc<dyn SearchProvider> =
        Arc::new(ScriptedProvider::default().with_page("owl", 1, Ok(records(7, 1))));
    let mut state = State::new(PerPage::default());

    drive(&mut state, provider.as_ref(), Message::QueryChanged(query("owl"))).await;

    assert_eq!(state.images().len(), 1);
    assert_eq!(state.images()[0].id, ImageId(7000));
}
