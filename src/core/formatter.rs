//! Line formatting
//!
//! Turns a [`LogRecord`] into the exact text written to the sink:
//!
//! ```text
//! [time ][TAG ][file:line ]body\n
//! ```

use super::config::LoggerConfig;
use super::log_entry::LogRecord;
use super::palette::{Paint, CALLER_PAINT, TIME_PAINT};
use std::fmt::Write as _;

/// Renders records according to a fixed [`LoggerConfig`]
#[derive(Debug, Clone)]
pub struct LineFormatter {
    config: LoggerConfig,
}

impl LineFormatter {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build the full line for `record`, terminated by exactly one newline
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let mut line = String::with_capacity(64);

        if let Some(ref timestamp) = record.timestamp {
            let time = self.config.time_layout.format(timestamp);
            if !time.is_empty() {
                self.push_segment(&mut line, &time, TIME_PAINT);
            }
        }

        if let Some(level) = record.level {
            self.push_segment(&mut line, level.tag(), level.paint());
        }

        if let Some(ref caller) = record.caller {
            self.push_segment(&mut line, &caller.to_string(), CALLER_PAINT);
        }

        // Writing into a String cannot fail
        let _ = write!(line, "{}", record.body);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        line
    }

    fn push_segment(&self, line: &mut String, text: &str, paint: Paint) {
        if self.config.show_color {
            paint.write_to(line, text);
        } else {
            line.push_str(text);
        }
        line.push(' ');
    }
}
