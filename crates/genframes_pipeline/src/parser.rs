//! Script to shot list conversion.

use genframes_core::{CompletionRequest, ParseRequest, Shot, ShotList, ShotOutline};
use genframes_error::{GenFramesResult, JsonError};
use genframes_interface::TextGenerator;
use tracing::{debug, info, instrument, warn};

const SYSTEM_MESSAGE: &str = "You are a professional storyboard artist. You MUST respond with valid JSON only. Do not include any text before or after the JSON object. Start your response with { and end with }.";

/// Sampling temperature used for shot extraction.
pub const DEFAULT_PARSE_TEMPERATURE: f32 = 0.3;

/// Token ceiling for the shot list reply.
pub const DEFAULT_PARSE_MAX_TOKENS: u32 = 2000;

/// Tunables for the text model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum reply length in tokens
    pub max_tokens: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_PARSE_TEMPERATURE,
            max_tokens: DEFAULT_PARSE_MAX_TOKENS,
        }
    }
}

/// Breaks a scene script into numbered shots with one text model call.
///
/// Model replies that are not a valid shot list never surface as errors:
/// the parser falls back to a fixed three-shot breakdown of the script.
#[derive(Debug, Clone)]
pub struct ScriptParser<T> {
    generator: T,
    options: ParserOptions,
}

impl<T: TextGenerator> ScriptParser<T> {
    /// Create a parser with default options.
    pub fn new(generator: T) -> Self {
        Self::with_options(generator, ParserOptions::default())
    }

    /// Create a parser with explicit options.
    pub fn with_options(generator: T, options: ParserOptions) -> Self {
        Self { generator, options }
    }

    /// Borrow the underlying generator.
    pub fn generator(&self) -> &T {
        &self.generator
    }

    /// Parse a script into shots ordered from 1.
    ///
    /// Validation happens before the model is contacted.
    #[instrument(
        skip(self, request),
        fields(
            script_len = request.script.len(),
            style = %request.style,
            model = self.generator.model_name(),
            shot_count = tracing::field::Empty
        )
    )]
    pub async fn parse(&self, request: &ParseRequest) -> GenFramesResult<Vec<Shot>> {
        request.validate()?;

        let completion = CompletionRequest::builder()
            .system(SYSTEM_MESSAGE)
            .prompt(build_parse_prompt(&request.script))
            .temperature(self.options.temperature)
            .max_tokens(self.options.max_tokens)
            .json_output(true)
            .build()
            .map_err(|e| JsonError::new(format!("Failed to build completion request: {}", e)))?;

        let reply = self.generator.complete(&completion).await?;
        debug!(reply_len = reply.len(), "Received shot list reply");

        let outlines = match decode_shot_list(&reply) {
            Ok(outlines) => outlines,
            Err(e) => {
                warn!(error = %e, "Model reply was not a usable shot list, using fallback shots");
                fallback_shots(&request.script)
            }
        };

        let shots = Shot::number(outlines);
        tracing::Span::current().record("shot_count", shots.len());
        info!("Parsed script into {} shots", shots.len());
        Ok(shots)
    }
}

/// Build the user instruction for the text model.
pub fn build_parse_prompt(script: &str) -> String {
    format!(
        r#"You are a professional storyboard artist and script supervisor. Parse the following scene script into individual shots for a storyboard.

For each shot, provide:
- title: A brief, descriptive title (e.g., "Hero Car Reveal", "Wide Establishing Shot")
- action: Detailed description of what happens in the shot
- camera: Camera angle/movement (e.g., "Wide shot", "Close-up", "Medium shot", "Pan left", "Dolly forward")
- duration: Estimated duration (e.g., "3 seconds", "1 second", "Beat")

Guidelines:
- Break complex actions into multiple shots
- Consider cinematic flow and pacing
- Use standard film terminology for camera angles
- Keep shots focused and actionable
- Aim for 3-8 shots total depending on complexity

Return ONLY a valid JSON object with this exact structure:
{{
  "shots": [
    {{
      "title": "Shot title",
      "action": "Detailed action description",
      "camera": "Camera angle/movement",
      "duration": "Time duration"
    }}
  ]
}}

Script to parse:
{}"#,
        script
    )
}

/// Narrow `text` to the span from the first `{` to the last `}`.
///
/// The trimmed text is returned unchanged when no such span exists.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Decode a model reply into shot outlines.
///
/// An empty `shots` array is treated as unusable.
pub fn decode_shot_list(reply: &str) -> Result<Vec<ShotOutline>, JsonError> {
    let list: ShotList = serde_json::from_str(extract_json(reply))?;
    if list.shots.is_empty() {
        return Err(JsonError::new("Shot list is empty"));
    }
    Ok(list.shots)
}

/// The fixed three-shot breakdown used when the model reply is unusable.
///
/// Short scripts may repeat a line across shots.
pub fn fallback_shots(script: &str) -> Vec<ShotOutline> {
    let lines: Vec<&str> = script.split('\n').collect();

    let opening = lines.first().copied().unwrap_or_default();
    let middle = lines.iter().skip(1).take(2).copied().collect::<Vec<_>>().join(" ");
    let closing = lines[lines.len().saturating_sub(2)..].join(" ");

    vec![
        ShotOutline::new(
            "Scene Opening",
            or_default(opening, "Opening shot of the scene"),
            "Wide shot",
            "3 seconds",
        ),
        ShotOutline::new(
            "Main Action",
            or_default(&middle, "Main action of the scene"),
            "Medium shot",
            "5 seconds",
        ),
        ShotOutline::new(
            "Scene Conclusion",
            or_default(&closing, "Conclusion of the scene"),
            "Close-up",
            "2 seconds",
        ),
    ]
}

fn or_default(text: &str, default: &str) -> String {
    if text.is_empty() {
        default.to_string()
    } else {
        text.to_string()
    }
}
