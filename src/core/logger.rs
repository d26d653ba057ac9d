//! Main logger implementation

use super::{
    caller::CallerLocation,
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::LineFormatter,
    log_entry::{LogRecord, Values},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::{Clock, SystemClock, TimeLayout},
    writer::SinkWriter,
};
use crate::sinks::Output;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Runs after a FATAL line has been written. The default exits the process.
pub type FatalHandler = Arc<dyn Fn() + Send + Sync>;

/// Invoked with the error whenever a line could not be written
pub type WriteErrorCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

/// Leveled console logger
///
/// Every emit method checks the level gate first, then formats one line and
/// hands it to a dedicated writer thread. The call returns once the line has
/// been written and flushed, so lines from concurrent callers never
/// interleave. A `Logger` is `Send + Sync` and can be shared behind an `Arc`.
///
/// Each level has three call shapes:
///
/// ```
/// use rust_console_logger::prelude::*;
/// use rust_console_logger::info;
///
/// let buffer = BufferSink::new();
/// let logger = Logger::builder()
///     .show_time(false)
///     .show_color(false)
///     .output(buffer.clone())
///     .build();
///
/// logger.info("plain value");
/// info!(logger, "formatted {}", 42);
/// logger.infoln(&[&"space", &"joined"]);
///
/// assert_eq!(
///     buffer.lines(),
///     vec!["[INF] plain value", "[INF] formatted 42", "[INF] space joined"]
/// );
/// ```
pub struct Logger {
    formatter: LineFormatter,
    clock: Arc<dyn Clock>,
    writer: SinkWriter,
    metrics: LoggerMetrics,
    on_fatal: FatalHandler,
    on_write_error: Option<WriteErrorCallback>,
}

impl Logger {
    /// Create a builder with the development preset
    ///
    /// # Example
    /// ```
    /// use rust_console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Warn)
    ///     .show_time(false)
    ///     .build();
    /// assert!(!logger.enabled(LogLevel::Info));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::dev()
    }

    /// The configuration in effect, after color negotiation with the sink
    pub fn config(&self) -> &LoggerConfig {
        self.formatter.config()
    }

    /// Whether a record of `level` would be written
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.config().enabled(level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit `message` at `level`
    ///
    /// Nothing happens below the minimum level: no clock read, no caller
    /// lookup, no I/O. A FATAL record runs the fatal handler after the line
    /// has been written.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let caller = if self.config().wants_caller(level) {
            CallerLocation::capture()
        } else {
            None
        };

        self.emit(Some(level), caller, &message);

        if level == LogLevel::Fatal {
            self.metrics.record_fatal();
            (self.on_fatal)();
        }
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    /// Emit a FATAL record, then run the fatal handler (exit by default)
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }

    /// Emit `values` joined by single spaces
    #[inline]
    #[track_caller]
    pub fn logln(&self, level: LogLevel, values: &[&dyn fmt::Display]) {
        self.log(level, Values(values));
    }

    #[inline]
    #[track_caller]
    pub fn debugln(&self, values: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Debug, values);
    }

    #[inline]
    #[track_caller]
    pub fn infoln(&self, values: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Info, values);
    }

    #[inline]
    #[track_caller]
    pub fn warnln(&self, values: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Warn, values);
    }

    #[inline]
    #[track_caller]
    pub fn errorln(&self, values: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Error, values);
    }

    #[inline]
    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn fmt::Display]) {
        self.logln(LogLevel::Fatal, values);
    }

    /// Write `message` without a level tag
    ///
    /// Untagged output is never gated and never carries a caller location;
    /// the time prefix still follows `show_time`.
    pub fn print(&self, message: impl fmt::Display) {
        self.emit(None, None, &message);
    }

    pub fn println(&self, values: &[&dyn fmt::Display]) {
        self.print(Values(values));
    }

    fn emit(&self, level: Option<LogLevel>, caller: Option<CallerLocation>, body: &dyn fmt::Display) {
        let mut record = LogRecord::new(level, body).with_caller(caller);
        if self.config().show_time {
            record = record.with_timestamp(self.clock.now());
        }

        let line = self.formatter.format(&record);
        match self.writer.submit(line) {
            Ok(()) => self.metrics.record_written(),
            Err(e) => {
                self.metrics.record_write_failure();
                if let Some(ref callback) = self.on_write_error {
                    callback(&e);
                }
            }
        }
    }

    /// Stop the writer thread, waiting up to `timeout` for it to finish
    ///
    /// Later emit calls are counted as write failures.
    ///
    /// # Returns
    ///
    /// `true` if the writer finished within the timeout, `false` otherwise
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.writer.shutdown(timeout)
    }

    fn from_parts(
        config: LoggerConfig,
        writer: SinkWriter,
        clock: Arc<dyn Clock>,
        on_fatal: Option<FatalHandler>,
        on_write_error: Option<WriteErrorCallback>,
    ) -> Self {
        let on_fatal: FatalHandler = match on_fatal {
            Some(handler) => handler,
            None => Arc::new(exit_process),
        };

        Self {
            formatter: LineFormatter::new(config),
            clock,
            writer,
            metrics: LoggerMetrics::new(),
            on_fatal,
            on_write_error,
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::dev().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", self.config())
            .field("running", &self.writer.is_running())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

fn exit_process() {
    std::process::exit(1);
}

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger with the console preset, writing to stdout
///
/// Created on first use. Nothing is allocated or spawned for programs that
/// never call it.
///
/// ```no_run
/// use rust_console_logger::default_logger;
///
/// default_logger().info("service started");
/// ```
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| LoggerBuilder::console().build())
}

/// Builder for constructing Logger with a fluent API
///
/// Setters accept any value; nothing is validated until
/// [`try_build`](LoggerBuilder::try_build).
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = LoggerBuilder::prod()
///     .time_layout("%H:%M:%S")
///     .output(BufferSink::new())
///     .on_write_error(Arc::new(|err: &LoggerError| {
///         eprintln!("log write failed: {}", err);
///     }))
///     .build();
/// assert!(!logger.config().show_color);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    output: Output,
    clock: Arc<dyn Clock>,
    on_fatal: Option<FatalHandler>,
    on_write_error: Option<WriteErrorCallback>,
}

impl LoggerBuilder {
    /// Start from an explicit configuration, writing to stdout
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            output: Output::Stdout,
            clock: Arc::new(SystemClock),
            on_fatal: None,
            on_write_error: None,
        }
    }

    /// Time, color and caller location on; DEBUG and up
    pub fn dev() -> Self {
        Self::new(LoggerConfig::dev())
    }

    /// No color; INFO and up
    pub fn prod() -> Self {
        Self::new(LoggerConfig::prod())
    }

    /// No time, colored tags, caller location on
    pub fn console() -> Self {
        Self::new(LoggerConfig::console())
    }

    /// Replace every formatting option at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_time(mut self, show: bool) -> Self {
        self.config.show_time = show;
        self
    }

    /// Enable ANSI colors
    ///
    /// Colors are still dropped for stdout/stderr when they are not a
    /// terminal or `NO_COLOR` is set.
    #[must_use = "builder methods return a new value"]
    pub fn show_color(mut self, show: bool) -> Self {
        self.config.show_color = show;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_caller_location(mut self, show: bool) -> Self {
        self.config.show_caller_location = show;
        self
    }

    /// Lowest level that gets a caller location (ERROR by default)
    #[must_use = "builder methods return a new value"]
    pub fn caller_location_level(mut self, level: LogLevel) -> Self {
        self.config.caller_location_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    /// Set the strftime pattern used for timestamps
    #[must_use = "builder methods return a new value"]
    pub fn time_layout(mut self, layout: impl Into<TimeLayout>) -> Self {
        self.config.time_layout = layout.into();
        self
    }

    /// Write to a custom sink
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.output = Output::writer(writer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self) -> Self {
        self.output = Output::Stdout;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stderr(mut self) -> Self {
        self.output = Output::Stderr;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the action taken after a FATAL line is written
    ///
    /// # Example
    ///
    /// ```
    /// use rust_console_logger::prelude::*;
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use std::sync::Arc;
    ///
    /// let fired = Arc::new(AtomicBool::new(false));
    /// let flag = Arc::clone(&fired);
    ///
    /// let logger = Logger::builder()
    ///     .output(BufferSink::new())
    ///     .on_fatal(Arc::new(move || flag.store(true, Ordering::SeqCst)))
    ///     .build();
    ///
    /// logger.fatal("cannot continue");
    /// assert!(fired.load(Ordering::SeqCst));
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, handler: FatalHandler) -> Self {
        self.on_fatal = Some(handler);
        self
    }

    /// Observe write failures, which are otherwise silently dropped
    #[must_use = "builder methods return a new value"]
    pub fn on_write_error(mut self, callback: WriteErrorCallback) -> Self {
        self.on_write_error = Some(callback);
        self
    }

    /// Build the Logger
    ///
    /// An invalid time layout is accepted and rendered literally.
    ///
    /// # Panics
    ///
    /// Panics if the writer thread cannot be spawned. Use
    /// [`try_build`](LoggerBuilder::try_build) to get an error instead.
    pub fn build(self) -> Logger {
        let LoggerBuilder {
            mut config,
            output,
            clock,
            on_fatal,
            on_write_error,
        } = self;

        config.show_color = config.show_color && output.supports_color();
        let writer = SinkWriter::start(output.into_writer());
        Logger::from_parts(config, writer, clock, on_fatal, on_write_error)
    }

    /// Build the Logger, rejecting an invalid time layout
    pub fn try_build(self) -> Result<Logger> {
        let LoggerBuilder {
            mut config,
            output,
            clock,
            on_fatal,
            on_write_error,
        } = self;

        config.time_layout.validate()?;
        config.show_color = config.show_color && output.supports_color();
        let writer = SinkWriter::spawn(output.into_writer())?;
        Ok(Logger::from_parts(
            config,
            writer,
            clock,
            on_fatal,
            on_write_error,
        ))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::dev()
    }
}

impl From<LoggerConfig> for LoggerBuilder {
    fn from(config: LoggerConfig) -> Self {
        Self::new(config)
    }
}
