//! Scroll host contract and the terminal scroll view that implements it
//!
//! A host is anything that can report its extents and scroll position along an
//! axis and that exposes a single hook slot invoked on every position change.

mod scroll_metrics;
mod scroll_view;

pub use scroll_metrics::{Axis, OffsetWatchable, ScrollHook, ScrollMetrics};
pub use scroll_view::ScrollView;
