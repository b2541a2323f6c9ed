//! Feed rendering

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use super::feed_state::FeedState;

/// Render the feed entries into `area`, shifted by the scroll offsets
pub fn render_feed(frame: &mut Frame, area: Rect, feed: &FeedState, offset: u16, h_offset: u16) {
    let lines: Vec<Line> = feed
        .entries()
        .iter()
        .map(|entry| Line::raw(entry.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines).scroll((offset, h_offset));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "feed_render_tests.rs"]
mod feed_render_tests;
