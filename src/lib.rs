//! # Rust Console Logger
//!
//! A small leveled console logger. Each record becomes one line:
//!
//! ```text
//! 01.30.2018 05:05:59 [ERR] main.rs:42 connection refused
//! ```
//!
//! ## Features
//!
//! - **Five levels**: DEBUG, INFO, WARN, ERROR, FATAL with a minimum-level gate
//! - **Readable prefixes**: optional timestamp, colored level tags, and the
//!   caller's `file:line` for errors
//! - **Thread Safe**: one writer thread per logger, lines never interleave
//! - **Presets**: `dev`, `prod` and a zero-configuration console logger

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        default_logger, CallerLocation, Clock, FatalHandler, FixedClock, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, SystemClock, TimeLayout,
        WriteErrorCallback, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{BufferSink, FileSink, Output};
}

pub use crate::core::{
    default_logger, CallerLocation, Clock, FatalHandler, FixedClock, LineFormatter, LogLevel,
    LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Paint, Result,
    SystemClock, TimeLayout, Values, WriteErrorCallback, DEFAULT_SHUTDOWN_TIMEOUT,
    DEFAULT_TIME_LAYOUT,
};
pub use crate::sinks::{BufferSink, FileSink, Output};
