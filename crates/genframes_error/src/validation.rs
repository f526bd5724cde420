//! Input validation errors.

use serde::{Deserialize, Serialize};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}: {}", path, message)]
pub struct FieldIssue {
    /// Name of the offending field (empty for whole-body problems)
    pub path: String,
    /// Human readable reason
    pub message: String,
}

impl FieldIssue {
    /// Create an issue for the given field.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Request rejected before any provider call was made.
///
/// # Examples
///
/// ```
/// use genframes_error::{FieldIssue, ValidationError};
///
/// let err = ValidationError::new(vec![FieldIssue::new(
///     "script",
///     "Script must be at least 10 characters",
/// )]);
/// assert_eq!(err.issues.len(), 1);
/// assert!(format!("{}", err).contains("script"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", summary(issues), line, file)]
pub struct ValidationError {
    /// Every field that failed validation
    pub issues: Vec<FieldIssue>,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ValidationError {
    /// Create a validation error at the caller's location.
    #[track_caller]
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            issues,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a single-field failure.
    #[track_caller]
    pub fn field(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldIssue::new(path, message)])
    }
}

fn summary(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
