//! Mouse event dispatcher
//!
//! Wheel events scroll the feed; everything else is ignored.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;

const WHEEL_SCROLL_LINES: u16 = 3;

/// Handle mouse events by scrolling the feed
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    {
        let mut scroll = app.scroll.borrow_mut();
        match mouse.kind {
            MouseEventKind::ScrollDown => scroll.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollUp => scroll.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollRight => scroll.scroll_right(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollLeft => scroll.scroll_left(WHEEL_SCROLL_LINES),
            _ => return,
        }
    }

    app.process_pending_loads();
}
