//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer thread already shut down
    #[error("Logger already stopped")]
    LoggerStopped,

    /// Time layout chrono cannot parse
    #[error("Invalid time layout '{layout}'")]
    InvalidTimeLayout { layout: String },

    /// Channel send error
    #[error("Failed to send log line to writer thread")]
    ChannelSendError,

    /// Channel receive error
    #[error("Failed to receive write acknowledgement from writer thread")]
    ChannelReceiveError,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn invalid_time_layout(layout: impl Into<String>) -> Self {
        LoggerError::InvalidTimeLayout {
            layout: layout.into(),
        }
    }
}
