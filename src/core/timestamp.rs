//! Timestamp layout and clock
//!
//! A [`TimeLayout`] is a strftime pattern in chrono's syntax. Patterns that
//! chrono cannot parse are kept as-is and written literally, so a bad layout
//! never breaks a log call. Callers who prefer to fail early can use
//! [`TimeLayout::validate`] or `LoggerBuilder::try_build`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `MM.DD.YYYY hh:mm:ss`, 24-hour clock
pub const DEFAULT_TIME_LAYOUT: &str = "%m.%d.%Y %H:%M:%S";

/// Strftime pattern used to render record timestamps
///
/// # Examples
///
/// ```
/// use rust_console_logger::TimeLayout;
/// use chrono::{Local, TimeZone};
///
/// let layout = TimeLayout::default();
/// let time = Local.with_ymd_and_hms(2018, 1, 30, 5, 5, 59).unwrap();
/// assert_eq!(layout.format(&time), "01.30.2018 05:05:59");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TimeLayout {
    pattern: String,
    valid: bool,
}

impl TimeLayout {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let valid = !StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        Self { pattern, valid }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether chrono understands every specifier in the pattern
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn validate(&self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(LoggerError::invalid_time_layout(&self.pattern))
        }
    }

    /// Render `datetime` with this layout
    ///
    /// An invalid pattern is returned unformatted.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if self.valid {
            datetime.format(&self.pattern).to_string()
        } else {
            self.pattern.clone()
        }
    }
}

impl Default for TimeLayout {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LAYOUT)
    }
}

impl From<String> for TimeLayout {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl From<&str> for TimeLayout {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<TimeLayout> for String {
    fn from(layout: TimeLayout) -> Self {
        layout.pattern
    }
}

impl fmt::Display for TimeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always returns the same instant. Useful for deterministic output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2018, 1, 30, 5, 5, 59)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_default_layout() {
        let result = TimeLayout::default().format(&fixed_datetime());
        assert_eq!(result, "01.30.2018 05:05:59");
    }

    #[test]
    fn test_custom_layout() {
        let layout = TimeLayout::new("%Y/%m/%d %H:%M");
        assert!(layout.is_valid());
        assert_eq!(layout.format(&fixed_datetime()), "2018/01/30 05:05");
    }

    #[test]
    fn test_invalid_layout_passes_through() {
        let layout = TimeLayout::new("%Q oops");
        assert!(!layout.is_valid());
        assert!(matches!(
            layout.validate(),
            Err(LoggerError::InvalidTimeLayout { .. })
        ));
        assert_eq!(layout.format(&fixed_datetime()), "%Q oops");
    }

    #[test]
    fn test_empty_layout_renders_empty() {
        let layout = TimeLayout::new("");
        assert!(layout.is_valid());
        assert_eq!(layout.format(&fixed_datetime()), "");
    }

    #[test]
    fn test_serialization() {
        let layout = TimeLayout::new("%H:%M");
        let json = serde_json::to_string(&layout).expect("serialize");
        assert_eq!(json, "\"%H:%M\"");

        let parsed: TimeLayout = serde_json::from_str("\"%Q\"").expect("deserialize");
        assert!(!parsed.is_valid());
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(fixed_datetime());
        assert_eq!(clock.now(), fixed_datetime());
        assert_eq!(clock.now(), clock.now());
    }
}
