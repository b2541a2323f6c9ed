//! scrollwatch library - end-of-content triggers for scrollable views
//!
//! [`OffsetWatcher`] subscribes to a scroll host and calls back once the
//! scroll position comes within a threshold of the end of the content, which
//! is the usual trigger for loading the next page of an infinite list.
//!
//! ```
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//! use scrollwatch::{OffsetWatcher, ScrollView};
//!
//! let view = Rc::new(RefCell::new(ScrollView::new()));
//! view.borrow_mut().update_bounds(100, 20);
//!
//! let hit = Rc::new(Cell::new(false));
//! let flag = hit.clone();
//! let watcher = OffsetWatcher::new(&view, 5.0, move || flag.set(true)).unwrap();
//!
//! view.borrow_mut().jump_to_bottom();
//! assert!(hit.get());
//! assert!(!watcher.is_armed());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod scroll;
pub mod watcher;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::WatchError;
pub use scroll::{Axis, OffsetWatchable, ScrollHook, ScrollMetrics, ScrollView};
pub use watcher::{OffsetWatcher, remaining_distance};
