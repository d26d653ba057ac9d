//! Core logger types

pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod palette;
pub mod timestamp;
mod writer;

pub use caller::CallerLocation;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::LineFormatter;
pub use log_entry::{LogRecord, Values};
pub use log_level::LogLevel;
pub use logger::{default_logger, FatalHandler, Logger, LoggerBuilder, WriteErrorCallback};
pub use metrics::LoggerMetrics;
pub use palette::Paint;
pub use timestamp::{Clock, FixedClock, SystemClock, TimeLayout, DEFAULT_TIME_LAYOUT};
pub use writer::DEFAULT_SHUTDOWN_TIMEOUT;
