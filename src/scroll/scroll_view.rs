use std::fmt;

use super::scroll_metrics::{Axis, OffsetWatchable, ScrollHook, ScrollMetrics};

/// Line-based scroll model for terminal views
///
/// Tracks vertical and horizontal offsets against the content and viewport
/// sizes, and runs the installed scroll hook every time either offset moves.
pub struct ScrollView {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
    pub h_offset: u16,
    pub max_h_offset: u16,
    pub viewport_width: u16,
    content_lines: u32,
    max_line_width: u16,
    hook: Option<ScrollHook>,
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
            h_offset: 0,
            max_h_offset: 0,
            viewport_width: 0,
            content_lines: 0,
            max_line_width: 0,
            hook: None,
        }
    }

    pub fn content_lines(&self) -> u32 {
        self.content_lines
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.content_lines = content_lines;
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.set_offset(self.offset.min(self.max_offset));
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.set_offset(self.offset.saturating_add(lines).min(self.max_offset));
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.set_offset(self.offset.saturating_sub(lines));
    }

    pub fn page_down(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_down(half_page);
    }

    pub fn page_up(&mut self) {
        let half_page = self.viewport_height / 2;
        self.scroll_up(half_page);
    }

    pub fn jump_to_top(&mut self) {
        self.set_offset(0);
    }

    pub fn jump_to_bottom(&mut self) {
        self.set_offset(self.max_offset);
    }

    pub fn update_h_bounds(&mut self, max_line_width: u16, viewport_width: u16) {
        self.max_line_width = max_line_width;
        self.viewport_width = viewport_width;
        self.max_h_offset = max_line_width.saturating_sub(viewport_width);
        self.set_h_offset(self.h_offset.min(self.max_h_offset));
    }

    pub fn scroll_right(&mut self, cols: u16) {
        self.set_h_offset(self.h_offset.saturating_add(cols).min(self.max_h_offset));
    }

    pub fn scroll_left(&mut self, cols: u16) {
        self.set_h_offset(self.h_offset.saturating_sub(cols));
    }

    pub fn jump_to_left(&mut self) {
        self.set_h_offset(0);
    }

    pub fn jump_to_right(&mut self) {
        self.set_h_offset(self.max_h_offset);
    }

    pub fn reset(&mut self) {
        let moved = self.offset != 0 || self.h_offset != 0;
        self.offset = 0;
        self.h_offset = 0;
        if moved {
            self.notify_scrolled();
        }
    }

    pub fn has_scroll_hook(&self) -> bool {
        self.hook.is_some()
    }

    fn set_offset(&mut self, offset: u16) {
        if offset != self.offset {
            self.offset = offset;
            self.notify_scrolled();
        }
    }

    fn set_h_offset(&mut self, h_offset: u16) {
        if h_offset != self.h_offset {
            self.h_offset = h_offset;
            self.notify_scrolled();
        }
    }

    /// Run the hook with the slot temporarily emptied so it can read `self`
    fn notify_scrolled(&mut self) {
        let Some(mut hook) = self.hook.take() else {
            return;
        };

        hook(&*self);
        self.hook = Some(hook);
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScrollView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollView")
            .field("offset", &self.offset)
            .field("max_offset", &self.max_offset)
            .field("viewport_height", &self.viewport_height)
            .field("h_offset", &self.h_offset)
            .field("max_h_offset", &self.max_h_offset)
            .field("viewport_width", &self.viewport_width)
            .field("content_lines", &self.content_lines)
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}

impl ScrollMetrics for ScrollView {
    fn content_extent(&self, axis: Axis) -> f64 {
        match axis {
            // Past u16::MAX lines only the reachable part of the content counts
            Axis::Vertical => f64::from(
                self.content_lines
                    .min(u32::from(self.max_offset) + u32::from(self.viewport_height)),
            ),
            Axis::Horizontal => f64::from(self.max_line_width),
        }
    }

    fn visible_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => f64::from(self.viewport_height),
            Axis::Horizontal => f64::from(self.viewport_width),
        }
    }

    fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => f64::from(self.offset),
            Axis::Horizontal => f64::from(self.h_offset),
        }
    }
}

impl OffsetWatchable for ScrollView {
    fn set_scroll_hook(&mut self, hook: Option<ScrollHook>) -> Option<ScrollHook> {
        std::mem::replace(&mut self.hook, hook)
    }
}

#[cfg(test)]
#[path = "scroll_view_tests.rs"]
mod scroll_view_tests;
