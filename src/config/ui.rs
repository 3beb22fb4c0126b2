//! Terminal UI settings

use serde::Deserialize;

/// Lower bound for the redraw tick
const MIN_TICK_MS: u64 = 16;

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (drives the spinner and toast expiry)
    pub tick_ms: u64,
    /// Show the log panel at startup
    pub show_logs: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            show_logs: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUi {
    pub tick_ms: Option<u64>,
    pub show_logs: Option<bool>,
}

impl UiConfig {
    pub fn from_file(file: Option<FileUi>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            tick_ms: file.tick_ms.unwrap_or(defaults.tick_ms).max(MIN_TICK_MS),
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
        }
    }
}
