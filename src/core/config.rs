//! Logger configuration and presets
//!
//! `LoggerConfig` carries every formatting flag. It is plain data: it can be
//! built by hand, picked from a preset, or deserialized from an application's
//! own config file, then handed to `LoggerBuilder::config`.

use super::log_level::LogLevel;
use super::timestamp::TimeLayout;
use serde::{Deserialize, Serialize};

/// Formatting and gating options for a `Logger`
///
/// Missing fields fall back to the [`LoggerConfig::dev`] preset when
/// deserializing.
///
/// # Examples
///
/// ```
/// use rust_console_logger::{LoggerConfig, LogLevel};
///
/// let config = LoggerConfig::prod();
/// assert!(!config.show_color);
/// assert_eq!(config.min_level, LogLevel::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Prefix each line with the current time
    pub show_time: bool,
    /// Wrap prefix segments in ANSI color codes
    pub show_color: bool,
    /// Add the caller's `file:line` for records at or above `caller_location_level`
    pub show_caller_location: bool,
    pub caller_location_level: LogLevel,
    /// Records below this level are dropped without any formatting work
    pub min_level: LogLevel,
    pub time_layout: TimeLayout,
}

impl LoggerConfig {
    /// Development preset: everything on, DEBUG and up
    pub fn dev() -> Self {
        Self {
            show_time: true,
            show_color: true,
            show_caller_location: true,
            caller_location_level: LogLevel::Error,
            min_level: LogLevel::Debug,
            time_layout: TimeLayout::default(),
        }
    }

    /// Production preset: no colors, INFO and up
    pub fn prod() -> Self {
        Self {
            show_color: false,
            min_level: LogLevel::Info,
            ..Self::dev()
        }
    }

    /// Defaults of the zero-configuration logger: no time, colored tags
    pub fn console() -> Self {
        Self {
            show_time: false,
            ..Self::dev()
        }
    }

    /// Whether a record of `level` passes the gate
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Whether a record of `level` gets a caller segment
    #[inline]
    pub fn wants_caller(&self, level: LogLevel) -> bool {
        self.show_caller_location && level >= self.caller_location_level
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::dev()
    }
}
