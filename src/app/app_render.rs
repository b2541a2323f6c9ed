use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, WatchStatus};
use crate::feed;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (feed_area, status_area) = (layout[0], layout[1]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" scrollwatch ")
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(feed_area);
        frame.render_widget(block, feed_area);

        // Viewport is only known once laid out
        self.sync_viewport(inner.height, inner.width);

        let (offset, h_offset) = {
            let scroll = self.scroll.borrow();
            (scroll.offset, scroll.h_offset)
        };
        feed::render_feed(frame, inner, &self.feed, offset, h_offset);

        frame.render_widget(Paragraph::new(self.status_line()), status_area);
    }

    pub fn status_line(&self) -> Line<'static> {
        let (label, color) = match self.watch_status() {
            WatchStatus::Watching => ("watching", Color::Green),
            WatchStatus::Paused => ("paused", Color::Yellow),
            WatchStatus::EndOfFeed => ("end of feed", Color::DarkGray),
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", label), Style::default().fg(color)),
            Span::raw(format!(
                "{} entries | page {}/{} | hits {}",
                self.feed.len(),
                self.feed.pages_loaded(),
                self.feed.max_pages(),
                self.hits()
            )),
        ];

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(
                format!(" | {}", warning),
                Style::default().fg(Color::Yellow),
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
