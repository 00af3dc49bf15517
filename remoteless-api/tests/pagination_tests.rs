//! Pagination tests for playlist listings
//!
//! These tests serve canned pages through an in-memory transport, so every
//! request the client makes can be checked without a daemon.

use std::cell::RefCell;
use std::collections::HashMap;

use proptest::prelude::*;
use remoteless_api::{ApiError, ClientConfig, RemotelessClient, Transport, TransportError};

const BASE: &str = "http://localhost:14387";

/// Serves one body per playlist offset and records every requested URL
struct ScriptedTransport {
    pages: HashMap<String, Result<String, TransportError>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn page(mut self, offset: i32, body: impl Into<String>) -> Self {
        self.pages.insert(page_url(offset), Ok(body.into()));
        self
    }

    fn failing_page(mut self, offset: i32, error: TransportError) -> Self {
        self.pages.insert(page_url(offset), Err(error));
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Status(404)))
    }
}

fn page_url(offset: i32) -> String {
    format!("{}/playlists?from={}", BASE, offset)
}

/// A page with `names.len()` playlists of one song each, then the markers.
/// With `closing`, a final empty playlist record makes every named playlist commit.
fn page_body(names: &[&str], from: i32, to: i32, remaining: i32, closing: bool) -> String {
    let mut body = String::new();
    for (i, name) in names.iter().enumerate() {
        body.push_str(&format!("playlist|{}|spotify:pl:{}|{}\n", i, name, name));
        body.push_str(&format!("track|0|spotify:track:{}|{} song\n", name, name));
        body.push_str(&format!("artist|0|spotify:artist:{}|{} artist\n", name, name));
    }
    if closing {
        body.push_str("playlist|99|spotify:pl:end|end\n");
    }
    body.push_str(&format!("from={}\nto={}\nremaining={}\n", from, to, remaining));
    body
}

fn client(transport: &ScriptedTransport) -> RemotelessClient<&ScriptedTransport> {
    RemotelessClient::with_transport(transport, ClientConfig::default()).unwrap()
}

fn names(playlists: &[remoteless_api::Playlist]) -> Vec<String> {
    playlists.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn test_single_final_page_is_not_refetched() {
    let transport = ScriptedTransport::new().page(0, page_body(&["a", "b"], 0, 2, 0, true));

    let playlists = client(&transport).playlists().unwrap();

    assert_eq!(names(&playlists), vec!["a", "b"]);
    assert_eq!(transport.requests(), vec![page_url(0)]);
}

#[test]
fn test_follows_to_offset_and_concatenates() {
    let transport = ScriptedTransport::new()
        .page(0, page_body(&["a", "b"], 0, 20, 5, true))
        .page(20, page_body(&["c"], 20, 25, 0, true));

    let playlists = client(&transport).playlists().unwrap();

    assert_eq!(names(&playlists), vec!["a", "b", "c"]);
    assert_eq!(transport.requests(), vec![page_url(0), page_url(20)]);
}

#[test]
fn test_stall_guard_stops_when_to_equals_from() {
    let transport = ScriptedTransport::new().page(0, page_body(&["a"], 0, 0, 5, true));

    let playlists = client(&transport).playlists().unwrap();

    assert_eq!(names(&playlists), vec!["a"]);
    assert_eq!(transport.requests(), vec![page_url(0)]);
}

#[test]
fn test_page_without_markers_ends_listing() {
    let transport = ScriptedTransport::new().page(0, page_body(&["a"], 0, 0, 0, true).replace("from=0\nto=0\nremaining=0\n", ""));

    let playlists = client(&transport).playlists().unwrap();

    assert_eq!(names(&playlists), vec!["a"]);
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn test_trailing_playlist_dropped_per_page_by_default() {
    let transport = ScriptedTransport::new()
        .page(0, page_body(&["a", "b"], 0, 2, 1, false))
        .page(2, page_body(&["c", "d"], 2, 4, 0, false));

    let playlists = client(&transport).playlists().unwrap();
    assert_eq!(names(&playlists), vec!["a", "c"]);

    let config = ClientConfig::new().with_flush_trailing_record(true);
    let flushing = RemotelessClient::with_transport(&transport, config).unwrap();
    assert_eq!(names(&flushing.playlists().unwrap()), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_playlists_from_custom_offset() {
    let transport = ScriptedTransport::new().page(40, page_body(&["z"], 40, 41, 0, true));

    let playlists = client(&transport).playlists_from(40).unwrap();

    assert_eq!(names(&playlists), vec!["z"]);
    assert_eq!(transport.requests(), vec![page_url(40)]);
}

#[test]
fn test_failure_on_later_page_fails_whole_listing() {
    let transport = ScriptedTransport::new()
        .page(0, page_body(&["a"], 0, 10, 3, true))
        .failing_page(10, TransportError::Network("connection reset".to_string()));

    let result = client(&transport).playlists();

    assert!(matches!(result, Err(ApiError::Transport(TransportError::Network(_)))));
    assert_eq!(transport.requests(), vec![page_url(0), page_url(10)]);
}

#[test]
fn test_decode_failure_on_later_page_fails_whole_listing() {
    let transport = ScriptedTransport::new()
        .page(0, page_body(&["a"], 0, 10, 3, true))
        .page(10, "playlist|0|spotify:pl:broken\nremaining=0\n");

    let result = client(&transport).playlists();

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn test_single_page_fetch_does_not_follow() {
    let transport = ScriptedTransport::new().page(0, page_body(&["a"], 0, 20, 5, true));

    let page = client(&transport).playlist_page(0).unwrap();

    assert_eq!(page.playlists.len(), 1);
    assert!(page.cursor.has_more());
    assert_eq!(transport.requests().len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// A chain of pages is fetched once each, in order, and concatenated
    #[test]
    fn prop_page_chain_concatenates(sizes in prop::collection::vec(0usize..4, 1..6)) {
        let mut transport = ScriptedTransport::new();
        let mut expected = Vec::new();
        let mut expected_requests = Vec::new();
        let mut offset = 0;

        for (page_index, size) in sizes.iter().enumerate() {
            let page_names: Vec<String> = (0..*size).map(|i| format!("p{}n{}", page_index, i)).collect();
            let refs: Vec<&str> = page_names.iter().map(String::as_str).collect();
            let last = page_index == sizes.len() - 1;
            let next = offset + 10;
            let remaining = if last { 0 } else { (sizes.len() - page_index - 1) as i32 };

            transport = transport.page(offset, page_body(&refs, offset, next, remaining, true));
            expected.extend(page_names);
            expected_requests.push(page_url(offset));
            offset = next;
        }

        let playlists = client(&transport).playlists().unwrap();
        prop_assert_eq!(names(&playlists), expected);
        prop_assert_eq!(transport.requests(), expected_requests);
    }
}
