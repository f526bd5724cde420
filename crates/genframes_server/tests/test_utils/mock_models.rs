//! Mock text and image generators.

use async_trait::async_trait;
use genframes_core::{CompletionRequest, GeneratedImage, ImageRequest};
use genframes_error::{GenFramesError, GenFramesResult, ProviderError, ProviderErrorKind};
use genframes_interface::{ImageGenerator, TextGenerator};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A single scripted reply (success payload or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ProviderErrorKind),
}

impl MockResponse {
    fn into_result(self) -> GenFramesResult<String> {
        match self {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(GenFramesError::from(ProviderError::new(kind))),
        }
    }
}

/// Replays responses in order; the last one repeats once the script runs out.
#[derive(Debug, Default)]
struct Script {
    responses: Vec<MockResponse>,
    calls: usize,
}

impl Script {
    fn advance(&mut self) -> GenFramesResult<String> {
        let index = self.calls.min(self.responses.len().saturating_sub(1));
        self.calls += 1;
        match self.responses.get(index) {
            Some(response) => response.clone().into_result(),
            None => Err(ProviderError::new(ProviderErrorKind::EmptyResponse).into()),
        }
    }
}

/// Mock text model recording every request it receives.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    script: Arc<Mutex<Script>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockTextGenerator {
    /// Always reply with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Success(text.into())])
    }

    /// Always fail with `kind`.
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(kind)])
    }

    /// Reply with each response in turn.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                responses,
                calls: 0,
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of completions requested.
    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().calls
    }

    /// Requests received so far.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn complete(&self, req: &CompletionRequest) -> GenFramesResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        self.script.lock().unwrap().advance()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// Mock image model returning numbered URLs.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    script: Arc<Mutex<Script>>,
    requests: Arc<Mutex<Vec<ImageRequest>>>,
    latency: Option<Duration>,
}

impl MockImageGenerator {
    /// Succeed every time with `https://images.test/frame-N.png`.
    pub fn new() -> Self {
        Self::new_sequence(vec![MockResponse::Success(String::new())])
    }

    /// Always fail with `kind`.
    #[allow(dead_code)]
    pub fn new_error(kind: ProviderErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(kind)])
    }

    /// Reply with each response in turn. An empty success payload means
    /// "use the numbered URL".
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                responses,
                calls: 0,
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
            latency: None,
        }
    }

    /// Wait `latency` before answering each request.
    #[allow(dead_code)]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of images requested.
    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().calls
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, req: &ImageRequest) -> GenFramesResult<GeneratedImage> {
        let number = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len()
        };
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let url = self.script.lock().unwrap().advance()?;
        if url.is_empty() {
            Ok(GeneratedImage::new(format!(
                "https://images.test/frame-{}.png",
                number
            )))
        } else {
            Ok(GeneratedImage::new(url))
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}
