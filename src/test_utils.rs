//! Shared test utilities for scrollwatch
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::app::App;
    use crate::config::{Config, FeedConfig, WatcherConfig};
    use crate::scroll::{Axis, OffsetWatchable, ScrollHook, ScrollMetrics};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Host with free-form f64 geometry on the vertical axis
    pub struct FakeScrollHost {
        pub content: f64,
        pub visible: f64,
        pub position: f64,
        hook: Option<ScrollHook>,
    }

    impl FakeScrollHost {
        pub fn new(content: f64, visible: f64) -> Self {
            Self {
                content,
                visible,
                position: 0.0,
                hook: None,
            }
        }

        pub fn shared(content: f64, visible: f64) -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self::new(content, visible)))
        }

        /// Move to `position` and deliver a scroll notification
        pub fn scroll_to(&mut self, position: f64) {
            self.position = position;
            self.notify();
        }

        /// Deliver a scroll notification without moving
        pub fn notify(&mut self) {
            if let Some(mut hook) = self.hook.take() {
                hook(&*self);
                self.hook = Some(hook);
            }
        }

        pub fn has_hook(&self) -> bool {
            self.hook.is_some()
        }
    }

    impl ScrollMetrics for FakeScrollHost {
        fn content_extent(&self, axis: Axis) -> f64 {
            match axis {
                Axis::Vertical => self.content,
                Axis::Horizontal => 0.0,
            }
        }

        fn visible_extent(&self, axis: Axis) -> f64 {
            match axis {
                Axis::Vertical => self.visible,
                Axis::Horizontal => 0.0,
            }
        }

        fn position(&self, axis: Axis) -> f64 {
            match axis {
                Axis::Vertical => self.position,
                Axis::Horizontal => 0.0,
            }
        }
    }

    impl OffsetWatchable for FakeScrollHost {
        fn set_scroll_hook(&mut self, hook: Option<ScrollHook>) -> Option<ScrollHook> {
            std::mem::replace(&mut self.hook, hook)
        }
    }

    /// Callback that counts how often it ran
    pub fn hit_counter() -> (Rc<Cell<usize>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();
        (hits, move || sink.set(sink.get() + 1))
    }

    /// Helper to create an App with a small feed and the given threshold
    pub fn test_app(page_size: usize, max_pages: usize, threshold: f64) -> App {
        let config = Config {
            watcher: WatcherConfig {
                threshold,
                ..WatcherConfig::default()
            },
            feed: FeedConfig {
                page_size,
                max_pages,
            },
        };
        App::new(&config).unwrap()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
