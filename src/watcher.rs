//! Offset watcher for pagination triggers
//!
//! Observes a scroll host and calls back once the scroll position comes within
//! a threshold of the end of the content.

mod offset_watcher;

pub use offset_watcher::{OffsetWatcher, remaining_distance};
