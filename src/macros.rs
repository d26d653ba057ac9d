//! Logging macros for ergonomic message formatting.
//!
//! The level macros take a logger and a `format!`-style template. They use
//! `format_args!`, so nothing is allocated for the message itself and a
//! suppressed record costs only the level comparison.
//!
//! The `*ln!` macros take a logger and a list of values, joined by single
//! spaces.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{info, warnln};
//!
//! let logger = Logger::builder().output(BufferSink::new()).build();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warnln!(logger, "disk", 93, "% full");
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::builder().output(BufferSink::new()).build();
/// use rust_console_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::builder().output(BufferSink::new()).build();
/// use rust_console_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// With caller locations enabled, the reported line is the line of the
/// macro invocation.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's fatal handler.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log space-joined values at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let buffer = BufferSink::new();
/// # let logger = Logger::builder().show_time(false).show_color(false).output(buffer.clone()).build();
/// use rust_console_logger::logln;
/// logln!(logger, LogLevel::Info, "retry", 3, "of", 5);
/// assert_eq!(buffer.contents(), "[INF] retry 3 of 5\n");
/// ```
#[macro_export]
macro_rules! logln {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.logln($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

#[macro_export]
macro_rules! debugln {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::LogLevel::Debug, $($value),+)
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::LogLevel::Info, $($value),+)
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::LogLevel::Warn, $($value),+)
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::LogLevel::Error, $($value),+)
    };
}

#[macro_export]
macro_rules! fatalln {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::logln!($logger, $crate::LogLevel::Fatal, $($value),+)
    };
}
