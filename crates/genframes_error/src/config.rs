//! Configuration error types.

/// Raised when service configuration cannot be loaded or is incomplete.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use genframes_error::ConfigError;
    ///
    /// let err = ConfigError::new("provider.api_key is not set");
    /// assert!(err.message.contains("api_key"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
