// Configuration type definitions

use serde::Deserialize;

use crate::scroll::Axis;

/// Watcher configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct WatcherConfig {
    /// Distance from the end of content at which the watcher fires
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub axis: Axis,
}

fn default_threshold() -> f64 {
    5.0
}

impl Default for WatcherConfig {
    fn default() -> Self {
        WatcherConfig {
            threshold: default_threshold(),
            axis: Axis::Vertical,
        }
    }
}

/// Demo feed configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_page_size() -> usize {
    40
}

fn default_max_pages() -> usize {
    25
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watcher: WatcherConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}
