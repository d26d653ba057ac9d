//! Log record structure

use super::caller::CallerLocation;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;

/// Everything needed to render one line
///
/// Records only live for the duration of a single emit call.
pub struct LogRecord<'a> {
    /// `None` for untagged `print` output
    pub level: Option<LogLevel>,
    pub timestamp: Option<DateTime<Local>>,
    pub caller: Option<CallerLocation>,
    pub body: &'a dyn fmt::Display,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: Option<LogLevel>, body: &'a dyn fmt::Display) -> Self {
        Self {
            level,
            timestamp: None,
            caller: None,
            body,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_caller(mut self, caller: Option<CallerLocation>) -> Self {
        self.caller = caller;
        self
    }
}

/// Space-separated list of values, as written by the `*ln` methods
///
/// # Examples
///
/// ```
/// use rust_console_logger::core::Values;
///
/// assert_eq!(Values(&[&"disk", &93, &"% full"]).to_string(), "disk 93 % full\n");
/// ```
#[derive(Clone, Copy)]
pub struct Values<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("\n")
    }
}
