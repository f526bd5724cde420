use crate::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse, OpenAiConfig, convert,
};
use genframes_core::{CompletionRequest, GeneratedImage, ImageRequest};
use genframes_error::{GenFramesResult, ProviderError, ProviderErrorKind};
use genframes_interface::{ImageGenerator, TextGenerator};
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

/// Client for an OpenAI-compatible text and image API
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new client
    #[instrument(skip(config), fields(base_url = %config.base_url, text_model = %config.text_model, image_model = %config.image_model))]
    pub fn new(config: OpenAiConfig) -> Self {
        tracing::debug!("Creating OpenAI client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ProviderError> {
        self.post_json("chat/completions", request).await
    }

    /// Send an image generation request
    #[instrument(skip(self, request), fields(model = %request.model, size = %request.size))]
    pub async fn image_generation(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, ProviderError> {
        self.post_json("images/generations", request).await
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url, path);
        tracing::debug!("Sending request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                ProviderError::new(ProviderErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.describe())
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    }
                });
            tracing::error!(status = %status, detail = %detail, "Provider returned error");
            return Err(ProviderError::new(ProviderErrorKind::classify(
                status.as_u16(),
                detail,
            )));
        }

        response.json::<R>().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ProviderError::new(ProviderErrorKind::Deserialization(e.to_string()))
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, req), fields(prompt_len = req.prompt.len()))]
    async fn complete(&self, req: &CompletionRequest) -> GenFramesResult<String> {
        let chat_request = convert::to_chat_request(req, &self.config.text_model);
        let response = self.chat_completion(&chat_request).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion finished"
            );
        }
        Ok(convert::from_chat_response(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.text_model
    }
}

#[async_trait::async_trait]
impl ImageGenerator for OpenAiClient {
    #[instrument(skip(self, req), fields(prompt_len = req.prompt.len()))]
    async fn generate_image(&self, req: &ImageRequest) -> GenFramesResult<GeneratedImage> {
        let image_request = convert::to_image_request(req, &self.config.image_model);
        let response = self.image_generation(&image_request).await?;
        Ok(convert::from_image_response(response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.config.image_model
    }
}
