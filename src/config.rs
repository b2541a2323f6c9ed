// Configuration module for scrollwatch
// This module handles loading and parsing configuration from ~/.config/scrollwatch/config.toml

mod types;

pub use types::{Config, FeedConfig, WatcherConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/scrollwatch/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!(
                "Config parsed successfully: threshold {} on {:?}",
                config.watcher.threshold,
                config.watcher.axis
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/scrollwatch/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("scrollwatch")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Axis;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // Feature: config-system, Property 1: Malformed TOML fallback
    // For any malformed TOML syntax in the config file, loading should return
    // all default values and surface a warning.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[watcher\nthreshold = 5.0",       // Missing closing bracket
                "[watcher]\naxis = vertical",      // Missing quotes
                "[watcher]\n threshold",           // Missing value
                "watcher]\nthreshold = 5.0",       // Missing opening bracket
                "[feed]\npage_size = \"forty",     // Unterminated string
            ])
        ) {
            let file = write_config(malformed);
            let result = load_config_from(file.path());

            prop_assert!(result.warning.is_some());
            prop_assert!(result.warning.unwrap().starts_with("Invalid config"));
            prop_assert_eq!(result.config.watcher.threshold, WatcherConfig::default().threshold);
            prop_assert_eq!(result.config.feed.page_size, FeedConfig::default().page_size);
        }
    }

    // Feature: config-system, Property 2: Config path consistency
    // The config path is stable across calls and ends with scrollwatch/config.toml.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_config_path_consistency(_iteration in 0..10u32) {
            let path1 = get_config_path();
            let path2 = get_config_path();

            prop_assert_eq!(&path1, &path2, "Config path should be consistent");

            let path_str = path1.to_string_lossy();
            prop_assert!(
                path_str.ends_with("scrollwatch/config.toml")
                    || path_str.ends_with("scrollwatch\\config.toml"),
                "Config path should end with scrollwatch/config.toml, got: {}",
                path_str
            );
        }
    }

    #[test]
    fn test_missing_file_uses_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("config.toml"));

        assert!(result.warning.is_none());
        assert_eq!(result.config.watcher.threshold, 5.0);
        assert_eq!(result.config.watcher.axis, Axis::Vertical);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let file = write_config(
            r#"
[watcher]
threshold = 12.0
axis = "horizontal"

[feed]
page_size = 10
max_pages = 3
"#,
        );
        let result = load_config_from(file.path());

        assert!(result.warning.is_none());
        assert_eq!(result.config.watcher.threshold, 12.0);
        assert_eq!(result.config.watcher.axis, Axis::Horizontal);
        assert_eq!(result.config.feed.page_size, 10);
        assert_eq!(result.config.feed.max_pages, 3);
    }

    #[test]
    fn test_unreadable_path_warns() {
        // A directory exists but cannot be read as a file
        let dir = TempDir::new().unwrap();
        let result = load_config_from(dir.path());

        let warning = result.warning.unwrap();
        assert!(warning.starts_with("Failed to read config"));
        assert_eq!(result.config.feed.page_size, FeedConfig::default().page_size);
    }

    #[test]
    fn test_invalid_axis_warns() {
        let file = write_config("[watcher]\naxis = \"diagonal\"\n");
        let result = load_config_from(file.path());

        assert!(result.warning.unwrap().starts_with("Invalid config"));
        assert_eq!(result.config.watcher.axis, Axis::Vertical);
    }
}
