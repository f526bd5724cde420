//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, ProviderError, ServerError, ValidationError};

/// Every failure the service can report.
///
/// # Examples
///
/// ```
/// use genframes_error::{GenFramesError, ValidationError};
///
/// let err: GenFramesError = ValidationError::field("camera", "Camera angle is required").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GenFramesErrorKind {
    /// Request input was rejected
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generative model provider failed
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Configuration could not be loaded
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// HTTP service failure
    #[from(ServerError)]
    Server(ServerError),
}

/// GenFrames error with kind discrimination.
///
/// # Examples
///
/// ```
/// use genframes_error::{ConfigError, GenFramesErrorKind, GenFramesResult};
///
/// fn load() -> GenFramesResult<()> {
///     Err(ConfigError::new("missing api key"))?
/// }
///
/// let err = load().unwrap_err();
/// assert!(matches!(err.kind(), GenFramesErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("GenFrames Error: {}", _0)]
pub struct GenFramesError(Box<GenFramesErrorKind>);

impl GenFramesError {
    /// Create a new error from a kind.
    pub fn new(kind: GenFramesErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenFramesErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> GenFramesErrorKind {
        *self.0
    }
}

impl<T> From<T> for GenFramesError
where
    T: Into<GenFramesErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for GenFrames operations.
pub type GenFramesResult<T> = std::result::Result<T, GenFramesError>;
