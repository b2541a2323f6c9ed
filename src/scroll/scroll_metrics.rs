use serde::Deserialize;

/// Axis along which extents and positions are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Read-only geometry of a scrollable host
///
/// All values are in content coordinates (lines, columns, points - whatever
/// unit the host scrolls in).
pub trait ScrollMetrics {
    /// Total size of the scrollable content
    fn content_extent(&self, axis: Axis) -> f64;

    /// Size of the visible viewport
    fn visible_extent(&self, axis: Axis) -> f64;

    /// Current scroll offset measured from the content origin
    fn position(&self, axis: Axis) -> f64;

    /// Position at which the far end of the content sits exactly at the
    /// visible edge. Negative when the content is shorter than the viewport.
    fn max_position(&self, axis: Axis) -> f64 {
        self.content_extent(axis) - self.visible_extent(axis)
    }
}

/// Callback a host runs synchronously whenever its scroll position changes
pub type ScrollHook = Box<dyn FnMut(&dyn ScrollMetrics)>;

/// A host with a single scroll-change hook slot
///
/// Installing a hook replaces whatever occupied the slot before; there is no
/// fan-out to multiple subscribers.
pub trait OffsetWatchable: ScrollMetrics {
    /// Install (or clear, with `None`) the scroll hook, returning the previous one
    fn set_scroll_hook(&mut self, hook: Option<ScrollHook>) -> Option<ScrollHook>;
}

#[cfg(test)]
#[path = "scroll_metrics_tests.rs"]
mod scroll_metrics_tests;
