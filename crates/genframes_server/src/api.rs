//! HTTP API for script parsing and frame generation.

use crate::{GenFramesConfig, UsageTracker};
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use genframes_core::{
    ErrorResponse, FrameRequest, FrameResponse, ParseRequest, ParseResponse,
};
use genframes_error::{
    FieldIssue, GenFramesError, GenFramesErrorKind, GenFramesResult, ProviderErrorKind,
    ServerErrorKind,
};
use genframes_interface::{ImageGenerator, TextGenerator};
use genframes_models::OpenAiClient;
use genframes_pipeline::{FramePromptBuilder, FrameRenderer, ScriptParser};
use genframes_security::PromptSanitizer;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Message returned when the image model refuses a prompt.
pub const CONTENT_POLICY_MESSAGE: &str =
    "Content not allowed. Please modify your scene description to comply with content policy.";

/// Message returned when the provider quota or the plan budget is spent.
pub const QUOTA_MESSAGE: &str = "API quota exceeded. Please try again later or upgrade your plan.";

/// Message returned for rejected request bodies.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";

/// Script parser over a shared text model.
pub type SharedParser = ScriptParser<Arc<dyn TextGenerator>>;

/// Frame renderer over a shared image model.
pub type SharedRenderer = FrameRenderer<Arc<dyn ImageGenerator>>;

/// State shared by every handler. Read-only apart from the usage counters.
#[derive(Clone)]
pub struct AppState {
    parser: Arc<SharedParser>,
    renderer: Arc<SharedRenderer>,
    usage: Arc<UsageTracker>,
}

impl AppState {
    /// Create state with an unlimited usage tracker.
    pub fn new(parser: SharedParser, renderer: SharedRenderer) -> Self {
        Self {
            parser: Arc::new(parser),
            renderer: Arc::new(renderer),
            usage: Arc::new(UsageTracker::unlimited()),
        }
    }

    /// Replace the usage tracker.
    pub fn with_usage(mut self, usage: UsageTracker) -> Self {
        self.usage = Arc::new(usage);
        self
    }

    /// Build state backed by the configured OpenAI-compatible provider.
    #[instrument(skip(config), fields(base_url = %config.provider.base_url))]
    pub fn from_config(config: &GenFramesConfig) -> GenFramesResult<Self> {
        let api_key = config.api_key()?;
        let client = Arc::new(OpenAiClient::new(config.openai_config(api_key)));
        let sanitizer = PromptSanitizer::new(&config.safety)?;

        let text: Arc<dyn TextGenerator> = client.clone();
        let image: Arc<dyn ImageGenerator> = client;

        let parser = ScriptParser::with_options(text, config.parser_options());
        let renderer = FrameRenderer::with_options(
            image,
            FramePromptBuilder::new(sanitizer),
            config.render_options(),
        );

        Ok(Self::new(parser, renderer)
            .with_usage(UsageTracker::new(config.limits.plan, config.limits.enforce)))
    }

    /// The script parser.
    pub fn parser(&self) -> &SharedParser {
        &self.parser
    }

    /// The frame renderer.
    pub fn renderer(&self) -> &SharedRenderer {
        &self.renderer
    }

    /// The usage tracker.
    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }
}

/// Creates the GenFrames API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/usage", get(get_usage))
        .route("/parse", post(parse_script))
        .route("/frame", post(generate_frame))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Current usage counters.
async fn get_usage(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.usage.snapshot()))
}

#[instrument(skip_all)]
async fn parse_script(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate().map_err(ApiError::parse)?;
    let slot = state.usage.reserve_parse().map_err(ApiError::parse)?;

    let shots = state.parser.parse(&request).await.map_err(ApiError::parse)?;
    slot.commit_as(shots.len());

    info!(shots = shots.len(), style = %request.style, "Script parsed");
    Ok(Json(ParseResponse::new(shots)))
}

#[instrument(skip_all)]
async fn generate_frame(
    State(state): State<AppState>,
    payload: Result<Json<FrameRequest>, JsonRejection>,
) -> Result<Json<FrameResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate().map_err(ApiError::frame)?;
    let slot = state.usage.reserve_frame().map_err(ApiError::frame)?;

    let rendered = state
        .renderer
        .render(&request)
        .await
        .map_err(ApiError::frame)?;
    slot.commit();

    info!(style = %request.style, "Frame generated");
    Ok(Json(FrameResponse::from(rendered)))
}

/// Handler failure, converted to an [`ErrorResponse`] body.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not valid JSON for the endpoint
    Rejected(JsonRejection),
    /// `/parse` failure; provider errors are reported as-is
    Parse(GenFramesError),
    /// `/frame` failure; content-policy and quota refusals get their own codes
    Frame(GenFramesError),
}

impl ApiError {
    /// Wrap a `/parse` failure.
    pub fn parse(err: impl Into<GenFramesError>) -> Self {
        Self::Parse(err.into())
    }

    /// Wrap a `/frame` failure.
    pub fn frame(err: impl Into<GenFramesError>) -> Self {
        Self::Frame(err.into())
    }

    /// Status code and body for this failure.
    pub fn to_response_parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::Rejected(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(INVALID_REQUEST_MESSAGE)
                    .with_details(vec![FieldIssue::new("body", rejection.body_text())]),
            ),
            Self::Parse(err) => describe(err, false),
            Self::Frame(err) => describe(err, true),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response_parts();
        if status.is_server_error() {
            error!(status = %status, error = ?self, "Request failed");
        } else {
            warn!(status = %status, error = %body.error, "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}

fn describe(err: &GenFramesError, provider_codes: bool) -> (StatusCode, ErrorResponse) {
    match err.kind() {
        GenFramesErrorKind::Validation(v) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(INVALID_REQUEST_MESSAGE).with_details(v.issues.clone()),
        ),
        GenFramesErrorKind::Provider(p) => match &p.kind {
            ProviderErrorKind::ContentPolicy(_) if provider_codes => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(CONTENT_POLICY_MESSAGE).with_code("CONTENT_POLICY_VIOLATION"),
            ),
            ProviderErrorKind::QuotaExceeded(_) if provider_codes => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new(QUOTA_MESSAGE).with_code("QUOTA_EXCEEDED"),
            ),
            kind => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(kind.to_string()),
            ),
        },
        GenFramesErrorKind::Server(s) => match &s.kind {
            ServerErrorKind::UsageLimit(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new(QUOTA_MESSAGE).with_code("QUOTA_EXCEEDED"),
            ),
            kind => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(kind.to_string()),
            ),
        },
        GenFramesErrorKind::Config(_) | GenFramesErrorKind::Json(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("Internal server error"),
        ),
    }
}
