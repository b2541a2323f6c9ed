use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::Config;
use crate::error::WatchError;
use crate::feed::FeedState;
use crate::scroll::ScrollView;
use crate::watcher::OffsetWatcher;

/// What the status line reports about the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchStatus {
    Watching,
    Paused,
    EndOfFeed,
}

pub struct App {
    pub scroll: Rc<RefCell<ScrollView>>,
    pub watcher: OffsetWatcher<ScrollView>,
    pub feed: FeedState,
    pub warning: Option<String>,
    pub should_quit: bool,
    /// Set by the watcher callback; drained after each scroll call returns
    load_requested: Rc<Cell<bool>>,
    hits: Rc<Cell<usize>>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, WatchError> {
        let mut feed = FeedState::from_config(&config.feed);
        feed.load_next_page();

        let scroll = Rc::new(RefCell::new(ScrollView::new()));
        scroll.borrow_mut().update_bounds(feed.len() as u32, 0);

        let load_requested = Rc::new(Cell::new(false));
        let hits = Rc::new(Cell::new(0));
        let on_hit = {
            let load_requested = load_requested.clone();
            let hits = hits.clone();
            move || {
                hits.set(hits.get() + 1);
                load_requested.set(true);
            }
        };

        let watcher = OffsetWatcher::from_config(&scroll, &config.watcher, on_hit)?;

        Ok(Self {
            scroll,
            watcher,
            feed,
            warning: None,
            should_quit: false,
            load_requested,
            hits,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Number of times the watcher has fired
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn watch_status(&self) -> WatchStatus {
        if self.watcher.is_armed() {
            WatchStatus::Watching
        } else if self.feed.is_exhausted() {
            WatchStatus::EndOfFeed
        } else {
            WatchStatus::Paused
        }
    }

    /// Apply the viewport size from the latest layout
    ///
    /// A resize changes how much content fits on screen without moving the
    /// offset, so an armed watcher re-checks the new geometry.
    pub fn sync_viewport(&mut self, height: u16, width: u16) {
        let resized = {
            let mut scroll = self.scroll.borrow_mut();
            let resized = scroll.viewport_height != height || scroll.viewport_width != width;
            scroll.update_bounds(self.feed.len() as u32, height);
            scroll.update_h_bounds(self.feed.max_line_width(), width);
            resized
        };

        if resized && self.watcher.is_armed() {
            self.watcher.rearm();
        }

        self.process_pending_loads();
    }

    /// Load pages until the watcher stops asking for more
    ///
    /// Each loaded page re-arms the watcher, which may fire again right away
    /// when the new page still ends inside the threshold.
    pub fn process_pending_loads(&mut self) {
        while self.load_requested.replace(false) {
            if !self.feed.load_next_page() {
                log::debug!("Feed exhausted after {} pages", self.feed.pages_loaded());
                break;
            }

            {
                let mut scroll = self.scroll.borrow_mut();
                let viewport_height = scroll.viewport_height;
                let viewport_width = scroll.viewport_width;
                scroll.update_bounds(self.feed.len() as u32, viewport_height);
                scroll.update_h_bounds(self.feed.max_line_width(), viewport_width);
            }

            self.watcher.rearm();
        }
    }

    /// Flip between watching and paused
    pub fn toggle_watching(&mut self) {
        if self.watcher.is_armed() {
            self.watcher.disarm();
        } else if !self.feed.is_exhausted() {
            self.watcher.rearm();
            self.process_pending_loads();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
