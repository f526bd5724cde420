//! Trait definitions for generative model providers.
//!
//! The pipeline only talks to models through these traits, so prompt
//! construction and response repair can be exercised against in-memory fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use genframes_core::{CompletionRequest, GeneratedImage, ImageRequest};
use genframes_error::GenFramesResult;
use std::sync::Arc;

/// A model that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a single completion and return the raw text of the first choice.
    async fn complete(&self, req: &CompletionRequest) -> GenFramesResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}

/// A model that turns a prompt into an image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image.
    ///
    /// Implementations must fail rather than return an empty URL.
    async fn generate_image(&self, req: &ImageRequest) -> GenFramesResult<GeneratedImage>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "dall-e-3").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> GenFramesResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: ImageGenerator + ?Sized> ImageGenerator for Arc<T> {
    async fn generate_image(&self, req: &ImageRequest) -> GenFramesResult<GeneratedImage> {
        (**self).generate_image(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
