//! Conversions between GenFrames request types and the OpenAI wire format.

use crate::{
    ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
    ImageGenerationResponse, Message, ResponseFormat,
};
use genframes_core::{CompletionRequest, GeneratedImage, ImageRequest};
use genframes_error::{ProviderError, ProviderErrorKind};

/// Build a chat completion request for `model`.
pub fn to_chat_request(req: &CompletionRequest, model: &str) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &req.system {
        messages.push(Message::system(system.clone()));
    }
    messages.push(Message::user(req.prompt.clone()));

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: req.max_tokens,
        temperature: req.temperature,
        response_format: req.json_output.then(ResponseFormat::json_object),
    }
}

/// Pull the text of the first choice out of a response.
#[track_caller]
pub fn from_chat_response(response: ChatCompletionResponse) -> Result<String, ProviderError> {
    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))
}

/// Build an image generation request for `model`. Always asks for one image.
pub fn to_image_request(req: &ImageRequest, model: &str) -> ImageGenerationRequest {
    ImageGenerationRequest {
        model: model.to_string(),
        prompt: req.prompt.clone(),
        size: req.size.clone(),
        quality: req.quality.clone(),
        n: 1,
    }
}

/// Pull the first image URL out of a response.
#[track_caller]
pub fn from_image_response(
    response: ImageGenerationResponse,
) -> Result<GeneratedImage, ProviderError> {
    let first = response
        .data
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingImage))?;

    match first.url {
        Some(url) if !url.is_empty() => Ok(GeneratedImage {
            url,
            revised_prompt: first.revised_prompt,
        }),
        _ => Err(ProviderError::new(ProviderErrorKind::MissingImage)),
    }
}
