use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const LINE_SCROLL: u16 = 1;
const COLUMN_SCROLL: u16 = 4;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('w') => {
                self.toggle_watching();
                return;
            }
            _ => {}
        }

        {
            let mut scroll = self.scroll.borrow_mut();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => scroll.scroll_down(LINE_SCROLL),
                KeyCode::Char('k') | KeyCode::Up => scroll.scroll_up(LINE_SCROLL),
                KeyCode::PageDown => scroll.page_down(),
                KeyCode::PageUp => scroll.page_up(),
                KeyCode::Char('g') | KeyCode::Home => scroll.jump_to_top(),
                KeyCode::Char('G') | KeyCode::End => scroll.jump_to_bottom(),
                KeyCode::Char('l') | KeyCode::Right => scroll.scroll_right(COLUMN_SCROLL),
                KeyCode::Char('h') | KeyCode::Left => scroll.scroll_left(COLUMN_SCROLL),
                _ => return,
            }
        }

        self.process_pending_loads();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
