//! Errors raised by the generative model provider.

/// Provider failure conditions.
///
/// Content-policy refusals and quota exhaustion are kept apart from other
/// failures so callers can react to them differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The model refused the prompt on policy grounds
    #[display("Content policy violation: {}", _0)]
    ContentPolicy(String),
    /// Account quota or billing limit reached
    #[display("Quota exceeded: {}", _0)]
    QuotaExceeded(String),
    /// Provider answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Provider error message
        message: String,
    },
    /// Request never reached the provider or the connection failed
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Response body did not match the expected shape
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
    /// Text model returned no content
    #[display("No response from text model")]
    EmptyResponse,
    /// Image model returned no image URL
    #[display("No image generated from image model")]
    MissingImage,
}

impl ProviderErrorKind {
    /// Classify a provider error payload.
    ///
    /// `detail` is the concatenation of whatever the provider reported (error
    /// code, type and message). Anything mentioning `content_policy` is a
    /// policy refusal; anything mentioning `quota` or `billing` is quota
    /// exhaustion; the rest is a plain API error.
    ///
    /// # Examples
    ///
    /// ```
    /// use genframes_error::ProviderErrorKind;
    ///
    /// let kind = ProviderErrorKind::classify(400, "content_policy_violation: rejected");
    /// assert!(matches!(kind, ProviderErrorKind::ContentPolicy(_)));
    ///
    /// let kind = ProviderErrorKind::classify(429, "insufficient_quota: check billing");
    /// assert!(matches!(kind, ProviderErrorKind::QuotaExceeded(_)));
    ///
    /// let kind = ProviderErrorKind::classify(500, "server exploded");
    /// assert!(matches!(kind, ProviderErrorKind::Api { status_code: 500, .. }));
    /// ```
    pub fn classify(status_code: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let lowered = detail.to_lowercase();
        if lowered.contains("content_policy") {
            Self::ContentPolicy(detail)
        } else if lowered.contains("quota") || lowered.contains("billing") {
            Self::QuotaExceeded(detail)
        } else {
            Self::Api {
                status_code,
                message: detail,
            }
        }
    }

    /// Machine-readable code exposed to API clients, if this kind has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::ContentPolicy(_) => Some("CONTENT_POLICY_VIOLATION"),
            Self::QuotaExceeded(_) => Some("QUOTA_EXCEEDED"),
            _ => None,
        }
    }
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use genframes_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of failure
    pub kind: ProviderErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
