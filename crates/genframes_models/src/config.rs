//! Connection settings for an OpenAI-compatible provider.

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for an OpenAI-compatible provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenAiConfig {
    /// API root, without trailing slash (e.g., "https://api.openai.com/v1")
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model used for script parsing
    pub text_model: String,
    /// Model used for frame rendering
    pub image_model: String,
}

impl OpenAiConfig {
    /// Settings for the public OpenAI API with the default models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            text_model: "gpt-4o".to_string(),
            image_model: "dall-e-3".to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }
}
