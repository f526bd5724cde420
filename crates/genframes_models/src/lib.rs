//! OpenAI-compatible model client for GenFrames.
//!
//! [`OpenAiClient`] implements both [`TextGenerator`] (chat completions, used
//! for script parsing) and [`ImageGenerator`] (image generations, used for
//! frame rendering). Provider error payloads are classified into the
//! content-policy / quota / generic taxonomy of
//! [`ProviderErrorKind`](genframes_error::ProviderErrorKind).
//!
//! # Example
//!
//! ```rust,no_run
//! use genframes_core::CompletionRequest;
//! use genframes_interface::TextGenerator;
//! use genframes_models::{OpenAiClient, OpenAiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(OpenAiConfig::new(std::env::var("OPENAI_API_KEY")?));
//!     let request = CompletionRequest::builder().prompt("Hello").build()?;
//!     let text = client.complete(&request).await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! [`TextGenerator`]: genframes_interface::TextGenerator
//! [`ImageGenerator`]: genframes_interface::ImageGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod request;
mod response;

pub use client::OpenAiClient;
pub use config::{DEFAULT_BASE_URL, OpenAiConfig};
pub use request::{ChatCompletionRequest, ImageGenerationRequest, Message, ResponseFormat};
pub use response::{
    ApiErrorBody, ApiErrorDetail, ChatCompletionResponse, Choice, ChoiceMessage, ImageData,
    ImageGenerationResponse, Usage,
};
