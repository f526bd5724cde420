//! Endpoint tests driving the router in-process with mock models.

mod test_utils;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use genframes_core::Plan;
use genframes_error::ProviderErrorKind;
use genframes_interface::{ImageGenerator, TextGenerator};
use genframes_pipeline::{FrameRenderer, ScriptParser};
use genframes_server::{AppState, UsageTracker, create_router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockImageGenerator, MockResponse, MockTextGenerator};
use tower::ServiceExt;

const SHOTS_REPLY: &str = r#"{"shots": [
    {"title": "Street", "action": "A quiet street in daylight", "camera": "Wide shot", "duration": "3 seconds"},
    {"title": "Speed", "action": "A car speeds by", "camera": "Pan left", "duration": "2 seconds"}
]}"#;

fn state(text: MockTextGenerator, image: MockImageGenerator) -> AppState {
    let text: Arc<dyn TextGenerator> = Arc::new(text);
    let image: Arc<dyn ImageGenerator> = Arc::new(image);
    AppState::new(ScriptParser::new(text), FrameRenderer::new(image))
}

fn app(text: MockTextGenerator, image: MockImageGenerator) -> Router {
    create_router(state(text, image))
}

async fn post_json(app: Router, uri: &str, body: &str) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

async fn get_json(app: Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder().uri(uri).body(Body::empty())?;
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let (status, body) = get_json(
        app(MockTextGenerator::new_success(SHOTS_REPLY), MockImageGenerator::new()),
        "/health",
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn test_parse_success() -> anyhow::Result<()> {
    let text = MockTextGenerator::new_success(SHOTS_REPLY);
    let (status, body) = post_json(
        app(text.clone(), MockImageGenerator::new()),
        "/parse",
        r#"{"script": "EXT. STREET - DAY\nA car speeds by.\nIt crashes.", "style": "noir"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["totalShots"], 2);
    assert_eq!(body["shots"][0]["order"], 1);
    assert_eq!(body["shots"][1]["order"], 2);
    assert_eq!(body["shots"][1]["camera"], "Pan left");
    assert_eq!(text.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_parse_short_script_is_400_without_model_call() -> anyhow::Result<()> {
    let text = MockTextGenerator::new_success(SHOTS_REPLY);
    let (status, body) = post_json(
        app(text.clone(), MockImageGenerator::new()),
        "/parse",
        r#"{"script": "too short"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["details"][0]["path"], "script");
    assert_eq!(
        body["details"][0]["message"],
        "Script must be at least 10 characters"
    );
    assert_eq!(text.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_parse_fallback_on_garbled_reply() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(
            MockTextGenerator::new_success("definitely not json"),
            MockImageGenerator::new(),
        ),
        "/parse",
        r#"{"script": "EXT. STREET - DAY\nA car speeds by.\nIt crashes."}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalShots"], 3);
    assert_eq!(body["shots"][0]["camera"], "Wide shot");
    assert_eq!(body["shots"][1]["camera"], "Medium shot");
    assert_eq!(body["shots"][2]["camera"], "Close-up");
    Ok(())
}

#[tokio::test]
async fn test_parse_provider_failure_is_500() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(
            MockTextGenerator::new_error(ProviderErrorKind::EmptyResponse),
            MockImageGenerator::new(),
        ),
        "/parse",
        r#"{"script": "EXT. STREET - DAY\nA car speeds by."}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No response from text model");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_and_unknown_style_are_400() -> anyhow::Result<()> {
    for body in [
        "{not json",
        r#"{"script": "EXT. STREET - DAY", "style": "watercolor"}"#,
        r#"{"style": "noir"}"#,
    ] {
        let (status, response) = post_json(
            app(MockTextGenerator::new_success(SHOTS_REPLY), MockImageGenerator::new()),
            "/parse",
            body,
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response["success"], false);
        assert_eq!(response["error"], "Invalid request data");
        assert!(response["details"].is_array());
    }
    Ok(())
}

#[tokio::test]
async fn test_frame_success_echoes_seed_and_metadata() -> anyhow::Result<()> {
    let image = MockImageGenerator::new();
    let (status, body) = post_json(
        app(MockTextGenerator::new_success(SHOTS_REPLY), image.clone()),
        "/frame",
        r#"{"shotDescription": "A quiet street in daylight", "camera": "Wide shot", "style": "noir", "title": "Street", "seed": "keepme123"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["frame"]["seed"], "keepme123");
    assert_eq!(body["frame"]["imageUrl"], "https://images.test/frame-1.png");
    assert_eq!(body["metadata"]["style"], "noir");
    assert_eq!(body["metadata"]["camera"], "Wide shot");
    assert_eq!(
        body["metadata"]["originalDescription"],
        "A quiet street in daylight"
    );

    let prompt = body["frame"]["prompt"].as_str().unwrap_or_default();
    assert!(prompt.starts_with("scene: street. a quiet street in daylight, wide shot angle"));
    assert!(prompt.contains("1940s cinematography"));
    assert_eq!(image.requests()[0].prompt, prompt);
    Ok(())
}

#[tokio::test]
async fn test_frame_validation_reports_every_field() -> anyhow::Result<()> {
    let image = MockImageGenerator::new();
    let (status, body) = post_json(
        app(MockTextGenerator::new_success(SHOTS_REPLY), image.clone()),
        "/frame",
        r#"{"shotDescription": "car", "camera": ""}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["path"], "shotDescription");
    assert_eq!(
        body["details"][0]["message"],
        "Shot description must be at least 5 characters"
    );
    assert_eq!(body["details"][1]["message"], "Camera angle is required");
    assert_eq!(image.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_frame_content_policy_is_400_with_code() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(
            MockTextGenerator::new_success(SHOTS_REPLY),
            MockImageGenerator::new_error(ProviderErrorKind::ContentPolicy(
                "content_policy_violation".into(),
            )),
        ),
        "/frame",
        r#"{"shotDescription": "Something questionable", "camera": "Close-up"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONTENT_POLICY_VIOLATION");
    assert_eq!(
        body["error"],
        "Content not allowed. Please modify your scene description to comply with content policy."
    );
    Ok(())
}

#[tokio::test]
async fn test_frame_quota_is_429() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(
            MockTextGenerator::new_success(SHOTS_REPLY),
            MockImageGenerator::new_error(ProviderErrorKind::QuotaExceeded(
                "insufficient_quota".into(),
            )),
        ),
        "/frame",
        r#"{"shotDescription": "A quiet street", "camera": "Wide shot"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "QUOTA_EXCEEDED");
    Ok(())
}

#[tokio::test]
async fn test_frame_other_provider_error_is_500() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(
            MockTextGenerator::new_success(SHOTS_REPLY),
            MockImageGenerator::new_error(ProviderErrorKind::Api {
                status_code: 503,
                message: "overloaded".into(),
            }),
        ),
        "/frame",
        r#"{"shotDescription": "A quiet street", "camera": "Wide shot"}"#,
    )
    .await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("code").is_none());
    assert_eq!(body["error"], "HTTP 503 error: overloaded");
    Ok(())
}

#[tokio::test]
async fn test_enforced_frame_budget() -> anyhow::Result<()> {
    let image = MockImageGenerator::new();
    let state = state(MockTextGenerator::new_success(SHOTS_REPLY), image.clone())
        .with_usage(UsageTracker::new(Plan::Free, true));
    let router = create_router(state);
    let body = r#"{"shotDescription": "A quiet street", "camera": "Wide shot"}"#;

    for _ in 0..20 {
        let (status, _) = post_json(router.clone(), "/frame", body).await?;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, response) = post_json(router.clone(), "/frame", body).await?;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response["code"], "QUOTA_EXCEEDED");
    assert_eq!(image.call_count(), 20);

    let (_, usage) = get_json(router, "/usage").await?;
    assert_eq!(usage["plan"], "FREE");
    assert_eq!(usage["framesUsedMonth"], 20);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_frames_cannot_overrun_budget() -> anyhow::Result<()> {
    let usage = UsageTracker::new(Plan::Free, true);
    for _ in 0..19 {
        usage.reserve_frame()?.commit();
    }
    let image = MockImageGenerator::new().with_latency(Duration::from_millis(50));
    let router = create_router(
        state(MockTextGenerator::new_success(SHOTS_REPLY), image.clone()).with_usage(usage),
    );
    let body = r#"{"shotDescription": "A quiet street", "camera": "Wide shot"}"#;

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move { post_json(router, "/frame", body).await })
        })
        .collect();

    let mut served = 0;
    let mut refused = 0;
    for handle in handles {
        let (status, response) = handle.await??;
        match status {
            StatusCode::OK => served += 1,
            StatusCode::TOO_MANY_REQUESTS => {
                assert_eq!(response["code"], "QUOTA_EXCEEDED");
                refused += 1;
            }
            other => anyhow::bail!("unexpected status {other}"),
        }
    }
    assert_eq!(served, 1);
    assert_eq!(refused, 4);
    assert_eq!(image.call_count(), 1);

    let (_, usage) = get_json(router, "/usage").await?;
    assert_eq!(usage["framesUsedMonth"], 20);
    Ok(())
}

#[tokio::test]
async fn test_failed_frame_returns_reserved_slot() -> anyhow::Result<()> {
    let image = MockImageGenerator::new_sequence(vec![
        MockResponse::Error(ProviderErrorKind::MissingImage),
        MockResponse::Success(String::new()),
    ]);
    let router = create_router(
        state(MockTextGenerator::new_success(SHOTS_REPLY), image.clone())
            .with_usage(UsageTracker::new(Plan::Free, true)),
    );
    let body = r#"{"shotDescription": "A quiet street", "camera": "Wide shot"}"#;

    let (status, _) = post_json(router.clone(), "/frame", body).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (_, usage) = get_json(router.clone(), "/usage").await?;
    assert_eq!(usage["framesUsedMonth"], 0);

    let (status, _) = post_json(router.clone(), "/frame", body).await?;
    assert_eq!(status, StatusCode::OK);
    let (_, usage) = get_json(router, "/usage").await?;
    assert_eq!(usage["framesUsedMonth"], 1);
    Ok(())
}
