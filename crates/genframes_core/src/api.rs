//! Wire types for the `/parse` and `/frame` endpoints.

use crate::{Frame, FrameMetadata, RenderedFrame, Shot, StyleTag};
use genframes_error::{FieldIssue, ValidationError};
use serde::{Deserialize, Serialize};

/// Minimum script length accepted by the parser, in characters.
///
/// Lengths are counted in UTF-16 code units, the unit browser clients use,
/// so a character outside the Basic Multilingual Plane counts twice.
pub const MIN_SCRIPT_CHARS: usize = 10;

/// Minimum shot description length accepted by the renderer, in characters.
pub const MIN_SHOT_DESCRIPTION_CHARS: usize = 5;

fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Body of `POST /parse`.
///
/// # Examples
///
/// ```
/// use genframes_core::{ParseRequest, StyleTag};
///
/// let req: ParseRequest = serde_json::from_str(r#"{"script": "EXT. STREET - DAY"}"#).unwrap();
/// assert_eq!(req.style, StyleTag::Realistic);
/// assert!(req.validate().is_ok());
///
/// let short = ParseRequest::new("too short", StyleTag::Noir);
/// assert!(short.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Raw scene script
    pub script: String,
    /// Rendering style for the project
    #[serde(default)]
    pub style: StyleTag,
}

impl ParseRequest {
    /// Create a request.
    pub fn new(script: impl Into<String>, style: StyleTag) -> Self {
        Self {
            script: script.into(),
            style,
        }
    }

    /// Check field constraints.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if text_len(&self.script) < MIN_SCRIPT_CHARS {
            return Err(ValidationError::field(
                "script",
                format!("Script must be at least {} characters", MIN_SCRIPT_CHARS),
            ));
        }
        Ok(())
    }
}

/// Body of `POST /frame`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Action text of the shot
    pub shot_description: String,
    /// Camera label of the shot
    pub camera: String,
    /// Rendering style
    #[serde(default)]
    pub style: StyleTag,
    /// Human-readable shot title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Seed to reuse for reproducible regeneration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Continuity context derived from earlier shots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_context: Option<String>,
}

impl FrameRequest {
    /// Create a request with only the required fields.
    pub fn new(shot_description: impl Into<String>, camera: impl Into<String>) -> Self {
        Self {
            shot_description: shot_description.into(),
            camera: camera.into(),
            style: StyleTag::default(),
            title: None,
            seed: None,
            previous_context: None,
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: StyleTag) -> Self {
        self.style = style;
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the continuity context.
    pub fn with_previous_context(mut self, context: impl Into<String>) -> Self {
        self.previous_context = Some(context.into());
        self
    }

    /// Build the request for rendering `shot`.
    pub fn for_shot(shot: &Shot, style: StyleTag, previous_context: Option<String>) -> Self {
        Self {
            shot_description: shot.action.clone(),
            camera: shot.camera.clone(),
            style,
            title: Some(shot.title.clone()),
            seed: None,
            previous_context,
        }
    }

    /// Check field constraints, reporting every failing field.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if text_len(&self.shot_description) < MIN_SHOT_DESCRIPTION_CHARS {
            issues.push(FieldIssue::new(
                "shotDescription",
                format!(
                    "Shot description must be at least {} characters",
                    MIN_SHOT_DESCRIPTION_CHARS
                ),
            ));
        }
        if self.camera.is_empty() {
            issues.push(FieldIssue::new("camera", "Camera angle is required"));
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Metadata echoed back alongside the rendered frame.
    pub fn metadata(&self) -> FrameMetadata {
        FrameMetadata {
            style: self.style,
            camera: self.camera.clone(),
            original_description: self.shot_description.clone(),
        }
    }
}

/// Successful `POST /parse` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    /// Always `true`
    pub success: bool,
    /// Parsed shots
    pub shots: Vec<Shot>,
    /// Number of shots
    pub total_shots: usize,
}

impl ParseResponse {
    /// Wrap a parsed shot list.
    pub fn new(shots: Vec<Shot>) -> Self {
        Self {
            success: true,
            total_shots: shots.len(),
            shots,
        }
    }
}

/// Successful `POST /frame` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameResponse {
    /// Always `true`
    pub success: bool,
    /// The rendered frame
    pub frame: Frame,
    /// Inputs it was rendered from
    pub metadata: FrameMetadata,
}

impl From<RenderedFrame> for FrameResponse {
    fn from(rendered: RenderedFrame) -> Self {
        Self {
            success: true,
            frame: rendered.frame,
            metadata: rendered.metadata,
        }
    }
}

/// Failure body shared by both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human readable message
    pub error: String,
    /// Field-level validation detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldIssue>>,
    /// Machine-readable error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Plain failure with a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            code: None,
        }
    }

    /// Attach validation details.
    pub fn with_details(mut self, details: Vec<FieldIssue>) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach an error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
