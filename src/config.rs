//! Runtime configuration shared by mounted widgets.

use std::time::Duration;

/// Quiescence window after the last resize before images are re-selected.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Configuration for mounting widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Trailing debounce applied to viewport resize notifications.
    pub resize_debounce: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

impl WidgetConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resize debounce window (builder).
    pub fn with_resize_debounce(mut self, window: Duration) -> Self {
        self.resize_debounce = window;
        self
    }
}
