//! Integration tests for post list ordering, expansion, and navigation.

use chrono::{TimeZone, Utc};
use foyer::content::{NavDirection, Post, PostListState, SortOrder};

fn post(id: u32, ts: i64) -> Post {
    Post {
        id,
        title: format!("post {id}"),
        description: String::new(),
        content: String::new(),
        published_at: Utc.timestamp_opt(ts, 0).unwrap(),
        read_time: "1 min".to_string(),
        tags: vec![],
    }
}

fn ids(state: &PostListState) -> Vec<u32> {
    state.sequence().map(|p| p.id).collect()
}

#[test]
fn defaults_to_newest_first() {
    let state = PostListState::new(vec![post(1, 100), post(2, 300), post(3, 200)]);
    assert_eq!(state.order(), SortOrder::Descending);
    assert_eq!(ids(&state), vec![2, 3, 1]);
}

#[test]
fn sort_flip_reverses_display_only() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 300), post(3, 200)]);
    state.set_sort_order(SortOrder::Ascending);
    assert_eq!(ids(&state), vec![1, 3, 2]);

    // Identity is untouched by sorting.
    state.select_post(3);
    assert_eq!(state.expanded(), Some(3));
    state.set_sort_order(SortOrder::Descending);
    assert_eq!(state.expanded(), Some(3), "sorting never changes expansion");
}

#[test]
fn ties_keep_authoring_order_in_both_directions() {
    let mut state = PostListState::new(vec![
        post(1, 100),
        post(2, 300),
        post(3, 300),
        post(4, 200),
    ]);
    assert_eq!(ids(&state), vec![2, 3, 4, 1]);

    state.set_sort_order(SortOrder::Ascending);
    assert_eq!(ids(&state), vec![1, 4, 2, 3]);
}

#[test]
fn select_twice_collapses() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 200)]);
    state.select_post(1);
    assert_eq!(state.expanded(), Some(1));
    state.select_post(1);
    assert_eq!(state.expanded(), None);
}

#[test]
fn selecting_another_post_swaps_atomically() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 200)]);
    state.select_post(1);
    state.select_post(2);
    assert_eq!(state.expanded(), Some(2), "exactly one post expanded");
}

#[test]
fn navigation_follows_the_current_sequence() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 300), post(3, 200)]);
    state.select_post(3); // middle of [2, 3, 1]

    state.navigate(NavDirection::Next);
    assert_eq!(state.expanded(), Some(1));
    state.navigate(NavDirection::Next);
    assert_eq!(state.expanded(), Some(1), "clamped at the end");

    state.navigate(NavDirection::Previous);
    state.navigate(NavDirection::Previous);
    assert_eq!(state.expanded(), Some(2));
    state.navigate(NavDirection::Previous);
    assert_eq!(state.expanded(), Some(2), "clamped at the start");
}

#[test]
fn navigation_without_expansion_is_a_noop() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 200)]);
    state.navigate(NavDirection::Next);
    assert_eq!(state.expanded(), None);
}

#[test]
fn navigation_respects_a_flipped_order() {
    let mut state = PostListState::new(vec![post(1, 100), post(2, 300), post(3, 200)]);
    state.select_post(1);
    state.set_sort_order(SortOrder::Ascending); // [1, 3, 2]
    state.navigate(NavDirection::Next);
    assert_eq!(state.expanded(), Some(3));
}

#[test]
fn empty_collection_is_safe() {
    let mut state = PostListState::new(vec![]);
    assert!(state.is_empty());
    state.set_sort_order(SortOrder::Ascending);
    state.navigate(NavDirection::Next);
    state.close_expanded();
    assert_eq!(state.expanded(), None);
}
