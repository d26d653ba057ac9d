//! Output sinks
//!
//! A sink is anything implementing [`std::io::Write`] + `Send`. [`Output`]
//! picks between the standard streams and a caller-supplied writer, and
//! decides whether colored output makes sense for it.

pub mod buffer;
pub mod file;

pub use buffer::BufferSink;
pub use file::FileSink;

use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Destination for formatted lines
#[derive(Default)]
pub enum Output {
    #[default]
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
}

impl Output {
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Output::Writer(Box::new(writer))
    }

    /// Whether ANSI styling should be written to this output
    ///
    /// The standard streams only get colors when attached to a terminal and
    /// `NO_COLOR` is unset. Custom writers keep whatever the config says.
    pub fn supports_color(&self) -> bool {
        match self {
            Output::Stdout => color_allowed_by_env() && io::stdout().is_terminal(),
            Output::Stderr => color_allowed_by_env() && io::stderr().is_terminal(),
            Output::Writer(_) => true,
        }
    }

    pub fn into_writer(self) -> Box<dyn Write + Send> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Stderr => Box::new(io::stderr()),
            Output::Writer(writer) => writer,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("Stdout"),
            Output::Stderr => f.write_str("Stderr"),
            Output::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

fn color_allowed_by_env() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |value| value.is_empty())
}
