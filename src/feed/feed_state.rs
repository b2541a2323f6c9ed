use crate::config::FeedConfig;

/// Entries loaded so far plus the pagination cursor
#[derive(Debug, Clone)]
pub struct FeedState {
    entries: Vec<String>,
    page_size: usize,
    max_pages: usize,
    pages_loaded: usize,
}

impl FeedState {
    pub fn new(page_size: usize, max_pages: usize) -> Self {
        Self {
            entries: Vec::new(),
            page_size: page_size.max(1),
            max_pages,
            pages_loaded: 0,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.page_size, config.max_pages)
    }

    /// Append the next page; returns false once every page is loaded
    pub fn load_next_page(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }

        self.pages_loaded += 1;
        let page = self.pages_loaded;
        let start = self.entries.len() + 1;
        self.entries
            .extend((start..start + self.page_size).map(|n| format_entry(n, page)));

        log::debug!(
            "Loaded page {}/{} ({} entries)",
            page,
            self.max_pages,
            self.entries.len()
        );
        true
    }

    pub fn is_exhausted(&self) -> bool {
        self.pages_loaded >= self.max_pages
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Widest entry in columns, clamped for ratatui
    pub fn max_line_width(&self) -> u16 {
        self.entries
            .iter()
            .map(|entry| entry.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }
}

fn format_entry(n: usize, page: usize) -> String {
    format!("{:05} p{:02} {}", n, page, "-".repeat(n % 7))
}

#[cfg(test)]
#[path = "feed_state_tests.rs"]
mod feed_state_tests;
