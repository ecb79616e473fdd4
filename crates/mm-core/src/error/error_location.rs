use std::fmt;
use std::panic::Location;

/// Source location of the call site that raised an error.
///
/// Captured through `#[track_caller]` constructors and rendered as
/// `[file:line]` at the end of error messages, so a log line points back
/// at the raising site without a backtrace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    file: &'static str,
    line: u32,
}

impl From<&'static Location<'static>> for ErrorLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.file, self.line)
    }
}
