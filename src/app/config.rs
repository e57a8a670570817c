use std::time::Duration;

use serde::Deserialize;

use crate::app::engine::{DEFAULT_BATCH_SIZE, DEFAULT_MIN_COLUMN_WIDTH, ViewOptions};

/// Tunables for the table viewer, read from the `[viewer]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Rows rendered per window batch
    pub batch_size: usize,
    /// Distance from the rendered end, in rows, that triggers the next batch
    pub extend_threshold_rows: usize,
    pub filter_debounce_ms: u64,
    pub scroll_debounce_ms: u64,
    /// Narrowest width a column can be dragged to, in terminal cells
    pub min_column_width: u16,
    /// Cap on automatically sized columns
    pub max_auto_column_width: u16,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            extend_threshold_rows: 8,
            filter_debounce_ms: 300,
            scroll_debounce_ms: 100,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_auto_column_width: 40,
        }
    }
}

impl ViewerConfig {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            batch_size: self.batch_size.max(1),
            min_column_width: self.min_column_width.max(1),
        }
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    pub fn scroll_debounce(&self) -> Duration {
        Duration::from_millis(self.scroll_debounce_ms)
    }

    /// Auto width cap, never below the minimum width.
    pub fn auto_width_cap(&self) -> u16 {
        self.max_auto_column_width.max(self.min_column_width)
    }
}

/// Top-level layout of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub viewer: ViewerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ViewerConfig::default();

        assert_eq!(config.batch_size, 100);
        assert_eq!(config.filter_debounce(), Duration::from_millis(300));
        assert_eq!(config.scroll_debounce(), Duration::from_millis(100));
        assert_eq!(config.min_column_width, 6);
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let file: ConfigFile = toml::from_str("[viewer]\nbatch_size = 25\n").unwrap();

        assert_eq!(file.viewer.batch_size, 25);
        assert_eq!(file.viewer.extend_threshold_rows, 8);
    }

    #[test]
    fn unknown_viewer_key_is_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("[viewer]\nbatch = 25\n");

        assert!(result.is_err());
    }

    #[test]
    fn zero_batch_size_is_clamped_for_the_engine() {
        let config = ViewerConfig {
            batch_size: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(config.view_options().batch_size, 1);
    }

    #[test]
    fn auto_width_cap_respects_minimum() {
        let config = ViewerConfig {
            min_column_width: 12,
            max_auto_column_width: 4,
            ..ViewerConfig::default()
        };

        assert_eq!(config.auto_width_cap(), 12);
    }
}
