//! Provider-neutral model request and result types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Single-turn text completion request.
///
/// # Examples
///
/// ```
/// use genframes_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .system("Respond with JSON only.")
///     .prompt("Parse this script")
///     .temperature(0.3f32)
///     .max_tokens(2000u32)
///     .json_output(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_tokens, Some(2000));
/// assert!(request.json_output);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// System instruction
    #[builder(default, setter(into, strip_option))]
    pub system: Option<String>,
    /// User prompt
    pub prompt: String,
    /// Sampling temperature
    #[builder(default, setter(into, strip_option))]
    pub temperature: Option<f32>,
    /// Token ceiling
    #[builder(default, setter(into, strip_option))]
    pub max_tokens: Option<u32>,
    /// Ask the provider for its structured JSON output mode
    #[builder(default)]
    pub json_output: bool,
}

impl CompletionRequest {
    /// Start building a request.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Image generation request.
///
/// Size and quality default to the provider's square standard output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Final prompt text
    pub prompt: String,
    /// Output resolution, e.g. `1024x1024`
    #[builder(default = "String::from(\"1024x1024\")")]
    pub size: String,
    /// Provider quality tier
    #[builder(default = "String::from(\"standard\")")]
    pub quality: String,
}

impl ImageRequest {
    /// Start building a request.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// Image returned by an image model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Where the image can be fetched
    pub url: String,
    /// Prompt as rewritten by the provider, when it reports one
    pub revised_prompt: Option<String>,
}

impl GeneratedImage {
    /// Image with no revised prompt.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revised_prompt: None,
        }
    }
}
