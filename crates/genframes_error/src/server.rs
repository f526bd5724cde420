//! Errors from running the HTTP service itself.

/// Server lifecycle failures.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Could not bind the listening socket
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Address that was requested
        addr: String,
        /// OS error message
        message: String,
    },
    /// The server loop exited with an error
    #[display("Server terminated: {}", _0)]
    Serve(String),
    /// Logging subscriber could not be installed
    #[display("Failed to initialise logging: {}", _0)]
    Logging(String),
    /// Local file could not be read or written
    #[display("I/O error: {}", _0)]
    Io(String),
    /// The configured plan budget is used up
    #[display("Usage limit reached: {}", _0)]
    UsageLimit(String),
}

/// Error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
