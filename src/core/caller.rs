//! Call-site capture
//!
//! Every public emit method on `Logger` is `#[track_caller]`, as is
//! [`CallerLocation::capture`]. The chain of tracked frames makes
//! [`std::panic::Location::caller`] report the line in user code that invoked
//! the logger, however many internal helpers sit in between.

use std::fmt;
use std::panic::Location;

/// Short file name and line of the code that invoked a logging operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    line: u32,
}

impl CallerLocation {
    /// Capture the location of the outermost `#[track_caller]` frame
    ///
    /// Returns `None` when the compiler reports no usable file name.
    #[track_caller]
    #[must_use]
    pub fn capture() -> Option<Self> {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Option<Self> {
        let file = short_file(location.file());
        if file.is_empty() {
            return None;
        }
        Some(Self {
            file,
            line: location.line(),
        })
    }

    /// Last path segment of the source file
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn short_file(path: &'static str) -> &'static str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
