//! Serialized sink writer
//!
//! A single background thread owns the sink. Emit calls hand their finished
//! line over a zero-capacity channel and wait for the thread to acknowledge
//! the write, so each line reaches the sink in one piece and the caller only
//! returns once it has been flushed.

use super::error::{LoggerError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// Used when the logger is dropped without explicit shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const WRITER_THREAD_NAME: &str = "console-log-writer";

struct WriteRequest {
    line: String,
    done: Sender<io::Result<()>>,
}

pub(crate) struct SinkWriter {
    sender: Option<Sender<WriteRequest>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SinkWriter {
    /// Start the writer thread, panicking if the OS refuses to create it
    pub(crate) fn start(sink: Box<dyn Write + Send>) -> Self {
        match Self::spawn(sink) {
            Ok(writer) => writer,
            Err(e) => panic!("failed to start log writer: {}", e),
        }
    }

    /// Start the writer thread, reporting spawn failures
    pub(crate) fn spawn(sink: Box<dyn Write + Send>) -> Result<Self> {
        let (sender, receiver) = bounded(0);
        let handle = thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || Self::run(sink, receiver))
            .map_err(|e| {
                LoggerError::io_operation("starting log writer", "could not spawn writer thread", e)
            })?;
        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn run(mut sink: Box<dyn Write + Send>, receiver: Receiver<WriteRequest>) {
        for request in receiver.iter() {
            let result = Self::write_line(&mut sink, &request.line);
            // The caller is blocked on this acknowledgement; if it is gone
            // there is nobody left to tell.
            let _ = request.done.send(result);
        }

        if let Err(e) = sink.flush() {
            eprintln!("[LOGGER ERROR] Final sink flush failed: {}", e);
        }
    }

    /// Write and flush one line, isolating panics raised by the sink
    fn write_line(sink: &mut Box<dyn Write + Send>, line: &str) -> io::Result<()> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            sink.write_all(line.as_bytes())?;
            sink.flush()
        }));

        match outcome {
            Ok(result) => result,
            Err(panic_info) => {
                let panic_msg = panic_message(panic_info.as_ref());
                eprintln!(
                    "[LOGGER CRITICAL] Sink panicked while writing: {}. \
                     The writer keeps running.",
                    panic_msg
                );
                Err(io::Error::other(format!("sink panicked: {}", panic_msg)))
            }
        }
    }

    /// Hand `line` to the writer thread and wait until it has been written
    pub(crate) fn submit(&self, line: String) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::LoggerStopped)?;
        let (done, acknowledged) = bounded(1);

        sender
            .send(WriteRequest { line, done })
            .map_err(|_| LoggerError::ChannelSendError)?;

        acknowledged
            .recv()
            .map_err(|_| LoggerError::ChannelReceiveError)?
            .map_err(|e| LoggerError::io_operation("writing log line", "sink rejected the line", e))
    }

    pub(crate) fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    /// Close the channel and wait up to `timeout` for the writer to finish
    ///
    /// Returns `true` if the writer exited cleanly within the timeout.
    pub(crate) fn shutdown(&mut self, timeout: Duration) -> bool {
        drop(self.sender.take());

        let Some(handle) = self.handle.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!(
                        "[LOGGER ERROR] Writer thread panicked during shutdown: {}",
                        panic_message(e.as_ref())
                    );
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Writer thread did not finish within {:?}. \
                     The sink may be blocked.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for SinkWriter {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::BufferSink;
    use std::sync::Arc;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct PanickingSink;

    impl Write for PanickingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_submit_writes_before_returning() {
        let buffer = BufferSink::new();
        let writer = SinkWriter::start(Box::new(buffer.clone()));

        writer.submit("first\n".to_string()).expect("write succeeds");
        assert_eq!(buffer.contents(), "first\n");

        writer.submit("second\n".to_string()).expect("write succeeds");
        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_start_uses_named_thread() {
        struct ThreadNameSink(Arc<parking_lot::Mutex<Option<String>>>);

        impl Write for ThreadNameSink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                *self.0.lock() = thread::current().name().map(str::to_string);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let seen = Arc::new(parking_lot::Mutex::new(None));
        let writer = SinkWriter::start(Box::new(ThreadNameSink(Arc::clone(&seen))));

        writer.submit("x\n".to_string()).expect("write succeeds");
        assert_eq!(seen.lock().as_deref(), Some(WRITER_THREAD_NAME));
    }

    #[test]
    fn test_write_error_is_reported() {
        let writer = SinkWriter::spawn(Box::new(BrokenPipe)).expect("spawn writer");
        let err = writer.submit("lost\n".to_string()).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_sink_panic_is_isolated() {
        let writer = SinkWriter::start(Box::new(PanickingSink));
        assert!(writer.submit("a\n".to_string()).is_err());
        // The thread survives and keeps answering
        assert!(writer.submit("b\n".to_string()).is_err());
        assert!(writer.is_running());
    }

    #[test]
    fn test_submit_after_shutdown() {
        let mut writer = SinkWriter::start(Box::new(BufferSink::new()));
        assert!(writer.shutdown(Duration::from_secs(1)));
        assert!(!writer.is_running());
        assert!(matches!(
            writer.submit("late\n".to_string()),
            Err(LoggerError::LoggerStopped)
        ));
    }

    #[test]
    fn test_concurrent_submits_stay_whole() {
        let buffer = BufferSink::new();
        let writer = Arc::new(SinkWriter::start(Box::new(buffer.clone())));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let writer = Arc::clone(&writer);
                thread::spawn(move || {
                    for i in 0..50 {
                        let line = format!("thread-{}-line-{}-{}\n", t, i, "x".repeat(64));
                        writer.submit(line).expect("write succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread finished");
        }

        let lines = buffer.lines();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.starts_with("thread-"));
            assert!(line.ends_with(&"x".repeat(64)));
        }
    }
}
