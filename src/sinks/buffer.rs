//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable writer backed by a shared byte buffer
///
/// Clones share the same buffer, so one handle can be given to the logger
/// while another inspects what was written.
///
/// # Example
///
/// ```
/// use rust_console_logger::prelude::*;
///
/// let buffer = BufferSink::new();
/// let logger = Logger::builder()
///     .show_time(false)
///     .show_color(false)
///     .output(buffer.clone())
///     .build();
///
/// logger.info("ready");
/// assert_eq!(buffer.contents(), "[INF] ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
