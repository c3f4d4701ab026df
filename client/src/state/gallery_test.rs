use futures::executor::block_on;

use super::*;
use crate::net::test_helpers::{FakeBackend, record_at, session};
use crate::state::auth::Username;

fn ascending(n: i64) -> Vec<UserLogoRecord> {
    (0..n).map(record_at).collect()
}

fn offsets(records: &[UserLogoRecord]) -> Vec<i64> {
    records.iter().map(|r| r.created_at.timestamp() - 1_700_000_000).collect()
}

// =============================================================
// list_recent
// =============================================================

#[test]
fn list_recent_returns_twelve_in_descending_order() {
    let backend = FakeBackend::with_records(ascending(12));
    let rows = block_on(list_recent(&backend, GALLERY_PAGE_SIZE)).unwrap();
    assert_eq!(offsets(&rows), (0..12).rev().collect::<Vec<_>>());
}

#[test]
fn list_recent_keeps_only_the_twelve_newest_of_twenty() {
    let backend = FakeBackend::with_records(ascending(20));
    let rows = block_on(list_recent(&backend, GALLERY_PAGE_SIZE)).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(offsets(&rows), (8..20).rev().collect::<Vec<_>>());
}

#[test]
fn list_recent_reorders_and_caps_unordered_backend_rows() {
    let backend = FakeBackend::with_records(vec![record_at(3), record_at(17), record_at(5), record_at(11)]);
    backend.ignore_query.set(true);
    let rows = block_on(list_recent(&backend, 3)).unwrap();
    assert_eq!(offsets(&rows), vec![17, 11, 5]);
}

#[test]
fn list_recent_empty_gallery_is_ok() {
    let backend = FakeBackend::default();
    assert!(block_on(list_recent(&backend, GALLERY_PAGE_SIZE)).unwrap().is_empty());
}

#[test]
fn list_recent_failure_maps_to_generic_fetch_error() {
    let backend = FakeBackend::default();
    backend.fail_list.set(true);
    let err = block_on(list_recent(&backend, GALLERY_PAGE_SIZE)).unwrap_err();
    assert_eq!(err.to_string(), "Failed to load user logos");
}

#[test]
fn retry_after_failure_fetches_again() {
    let backend = FakeBackend::with_records(ascending(2));
    backend.fail_list.set(true);
    let mut state = GalleryState::default();

    state.begin_fetch();
    state.finish_fetch(block_on(list_recent(&backend, GALLERY_PAGE_SIZE)));
    assert_eq!(state.error.as_deref(), Some("Failed to load user logos"));
    assert!(!state.loading);

    backend.fail_list.set(false);
    state.begin_fetch();
    assert!(state.error.is_none());
    state.finish_fetch(block_on(list_recent(&backend, GALLERY_PAGE_SIZE)));

    assert_eq!(state.items.len(), 2);
    assert!(state.error.is_none());
    assert_eq!(backend.calls(), vec!["list:12".to_owned(), "list:12".to_owned()]);
}

#[test]
fn most_recent_first_is_stable_for_equal_timestamps() {
    let mut a = record_at(1);
    a.id = "a".to_owned();
    let mut b = record_at(1);
    b.id = "b".to_owned();
    let rows = most_recent_first(vec![a, b], 12);
    assert_eq!(rows.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
}

// =============================================================
// save_logo
// =============================================================

#[test]
fn save_logo_inserts_under_username_with_session() {
    let backend = FakeBackend::default();
    let auth = AuthState::logged_in(Username::parse("alice").unwrap(), Some(session("t")));
    let colors = LogoColorSet::default();

    let saved = block_on(save_logo(&backend, &auth, &colors)).unwrap();

    assert_eq!(saved.x_username, "alice");
    assert_eq!(saved.logo_colors, colors);
    assert_eq!(backend.calls(), vec!["insert:alice:true".to_owned()]);
}

#[test]
fn save_logo_requires_login() {
    let backend = FakeBackend::default();
    let err = block_on(save_logo(&backend, &AuthState::logged_out(), &LogoColorSet::default())).unwrap_err();
    assert_eq!(err, SaveError::LoginRequired);
    assert!(backend.calls().is_empty());
}

#[test]
fn save_logo_backend_failure_is_reported() {
    let backend = FakeBackend::default();
    backend.fail_insert.set(true);
    let auth = AuthState::logged_in(Username::parse("alice").unwrap(), None);
    let err = block_on(save_logo(&backend, &auth, &LogoColorSet::default())).unwrap_err();
    assert!(matches!(err, SaveError::Backend(_)));
    assert_eq!(err.to_string(), "Failed to save. Please try again.");
}

#[test]
fn saved_logo_shows_up_first_in_next_fetch() {
    let backend = FakeBackend::with_records(ascending(12));
    let auth = AuthState::logged_in(Username::parse("zed").unwrap(), None);
    block_on(save_logo(&backend, &auth, &LogoColorSet::default())).unwrap();

    let rows = block_on(list_recent(&backend, GALLERY_PAGE_SIZE)).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].x_username, "zed");
}

#[test]
fn request_refresh_bumps_sequence() {
    let mut state = GalleryState::default();
    state.request_refresh();
    state.request_refresh();
    assert_eq!(state.refresh_seq, 2);
}

#[test]
fn empty_gallery_has_no_items_to_show() {
    let mut state = GalleryState::default();
    state.begin_fetch();
    state.finish_fetch(Ok(Vec::new()));
    assert!(!state.has_items());
    assert_eq!(state.count_label(), "0 unique designs");
}

#[test]
fn loaded_gallery_shows_items_and_count() {
    let backend = FakeBackend::with_records(ascending(3));
    let mut state = GalleryState::default();
    state.begin_fetch();
    state.finish_fetch(block_on(list_recent(&backend, GALLERY_PAGE_SIZE)));
    assert!(state.has_items());
    assert_eq!(state.count_label(), "3 unique designs");
}
