use serde::{Deserialize, Serialize};

/// OpenAI chat completion response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionResponse {
    /// Unique identifier for the completion
    #[serde(default)]
    pub id: String,
    /// Model used for completion
    #[serde(default)]
    pub model: String,
    /// Generated completions
    pub choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if there is any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Index of this choice
    #[serde(default)]
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
    /// Reason why generation finished
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: String,
    /// Generated content, absent on refusals
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// OpenAI image generation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageGenerationResponse {
    /// Unix timestamp
    #[serde(default)]
    pub created: i64,
    /// Generated images
    #[serde(default)]
    pub data: Vec<ImageData>,
}

/// One generated image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ImageData {
    /// Hosted image URL
    #[serde(default)]
    pub url: Option<String>,
    /// Prompt after provider-side rewriting
    #[serde(default)]
    pub revised_prompt: Option<String>,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ApiErrorBody {
    /// Error detail
    pub error: ApiErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ApiErrorDetail {
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Error category, e.g. `invalid_request_error`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Error code, e.g. `content_policy_violation`
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorDetail {
    /// Code, type and message joined into one string for classification.
    pub fn describe(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(code) = self.code.as_deref() {
            parts.push(code);
        }
        if let Some(kind) = self.kind.as_deref() {
            parts.push(kind);
        }
        let prefix = parts.join("/");
        if prefix.is_empty() {
            self.message.clone()
        } else {
            format!("{}: {}", prefix, self.message)
        }
    }
}
