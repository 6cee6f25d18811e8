//! Fault type for the effect system.
//!
//! A fault is what an [`IO`](super::IO) raises: it is returned as `Err` from
//! `run` unless `attempt`, `recover` or `retry` handle it. `IO` is generic
//! over its fault type; [`Fault`] is the default, and the one produced by
//! the file helpers.

use std::fmt;
use std::path::PathBuf;

/// A fault raised while running an effect.
///
/// # Examples
///
/// ```rust
/// use rivulet::effect::Fault;
///
/// let fault = Fault::message("connection reset");
/// assert_eq!(fault.to_string(), "connection reset");
/// ```
#[derive(Debug)]
pub enum Fault {
    /// A filesystem operation failed.
    Io {
        /// The path the operation was working on.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Reading from or writing to the console failed.
    Console(std::io::Error),
    /// A fault described only by a message.
    Message(String),
}

impl Fault {
    /// Creates a message-only fault.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Creates a fault for a failed filesystem operation.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the kind of the underlying I/O error, if this is an I/O or
    /// console fault.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } | Self::Console(source) => Some(source.kind()),
            Self::Message(_) => None,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(formatter, "{}: {source}", path.display()),
            Self::Console(source) => write!(formatter, "console: {source}"),
            Self::Message(message) => formatter.write_str(message),
        }
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Console(source) => Some(source),
            Self::Message(_) => None,
        }
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_message_fault_display() {
        let fault = Fault::message("disk full");
        assert_eq!(format!("{fault}"), "disk full");
    }

    #[test]
    fn test_io_fault_display_includes_path() {
        let fault = Fault::io(
            "/tmp/missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(format!("{fault}"), "/tmp/missing.txt: not found");
        assert_eq!(fault.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_io_fault_source_is_io_error() {
        let fault = Fault::io(
            "data.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = fault.source().expect("io fault has a source");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_console_fault_display_and_kind() {
        let fault = Fault::Console(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
        assert_eq!(fault.to_string(), "console: end of input");
        assert_eq!(fault.io_kind(), Some(std::io::ErrorKind::UnexpectedEof));
        assert!(fault.source().is_some());
    }

    #[test]
    fn test_message_fault_has_no_source() {
        let fault: Fault = "plain".into();
        assert!(fault.source().is_none());
        assert!(fault.io_kind().is_none());
    }

    #[test]
    fn test_fault_debug() {
        let debug_string = format!("{:?}", Fault::message("x"));
        assert!(debug_string.contains("Message"));
    }
}
