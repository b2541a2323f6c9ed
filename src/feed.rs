//! Paginated demo feed
//!
//! A synthetic list of entries that grows one page at a time. The demo binary
//! appends a page each time the offset watcher fires.

mod feed_render;
mod feed_state;

pub use feed_render::render_feed;
pub use feed_state::FeedState;
