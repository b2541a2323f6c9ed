//! Tests for FeedState

use super::*;

#[test]
fn test_new_feed_is_empty() {
    let feed = FeedState::new(10, 3);
    assert!(feed.is_empty());
    assert_eq!(feed.pages_loaded(), 0);
    assert!(!feed.is_exhausted());
}

#[test]
fn test_load_next_page_appends_page_size_entries() {
    let mut feed = FeedState::new(10, 3);

    assert!(feed.load_next_page());
    assert_eq!(feed.len(), 10);
    assert!(feed.load_next_page());
    assert_eq!(feed.len(), 20);
    assert_eq!(feed.pages_loaded(), 2);
}

#[test]
fn test_entries_are_numbered_across_pages() {
    let mut feed = FeedState::new(2, 2);
    feed.load_next_page();
    feed.load_next_page();

    assert_eq!(
        feed.entries(),
        &["00001 p01 -", "00002 p01 --", "00003 p02 ---", "00004 p02 ----"]
    );
}

#[test]
fn test_exhausted_after_max_pages() {
    let mut feed = FeedState::new(5, 2);
    feed.load_next_page();
    feed.load_next_page();

    assert!(feed.is_exhausted());
    assert!(!feed.load_next_page());
    assert_eq!(feed.len(), 10);
}

#[test]
fn test_zero_page_size_loads_one_entry() {
    let mut feed = FeedState::new(0, 1);
    feed.load_next_page();
    assert_eq!(feed.len(), 1);
}

#[test]
fn test_zero_max_pages_is_immediately_exhausted() {
    let mut feed = FeedState::new(10, 0);
    assert!(feed.is_exhausted());
    assert!(!feed.load_next_page());
}

#[test]
fn test_max_line_width() {
    let mut feed = FeedState::new(7, 1);
    assert_eq!(feed.max_line_width(), 0);

    feed.load_next_page();
    // Entry 6 carries the longest filler: "00006 p01 ------"
    assert_eq!(feed.max_line_width(), 16);
}

#[test]
fn test_from_config() {
    let config = FeedConfig {
        page_size: 3,
        max_pages: 4,
    };
    let feed = FeedState::from_config(&config);
    assert_eq!(feed.max_pages(), 4);
}
