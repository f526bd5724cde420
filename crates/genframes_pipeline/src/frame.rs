//! Frame prompt construction and rendering.

use genframes_core::{Frame, FrameRequest, ImageRequest, RenderedFrame, StyleTag};
use genframes_error::{GenFramesResult, JsonError};
use genframes_interface::ImageGenerator;
use genframes_security::PromptSanitizer;
use rand::{Rng, distributions::Alphanumeric};
use tracing::{debug, info, instrument};

/// Framing instructions appended to every image prompt.
pub const STORYBOARD_SUFFIX: &str =
    ", storyboard frame, professional composition, clear visual storytelling";

/// Extra instruction appended for the meme style.
pub const PARODY_WATERMARK: &str = ", add satirical watermark overlay saying \"PARODY\"";

/// Length of generated seeds.
pub const SEED_LEN: usize = 13;

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output resolution
    pub size: String,
    /// Provider quality tier
    pub quality: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
        }
    }
}

/// Builds the image prompt for a frame request.
#[derive(Debug, Clone, Default)]
pub struct FramePromptBuilder {
    sanitizer: PromptSanitizer,
}

impl FramePromptBuilder {
    /// Create a builder around a sanitizer.
    pub fn new(sanitizer: PromptSanitizer) -> Self {
        Self { sanitizer }
    }

    /// Assemble the final prompt.
    ///
    /// Title and continuity are included only when non-empty. The framing
    /// suffix and watermark are added after sanitising so they reach the
    /// model verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use genframes_core::{FrameRequest, StyleTag};
    /// use genframes_pipeline::FramePromptBuilder;
    ///
    /// let request = FrameRequest::new("A car speeds by", "Wide shot").with_style(StyleTag::Noir);
    /// let prompt = FramePromptBuilder::default().build(&request);
    /// assert!(prompt.starts_with("a car speeds by, wide shot angle, film noir style"));
    /// assert!(prompt.ends_with("clear visual storytelling"));
    /// ```
    pub fn build(&self, request: &FrameRequest) -> String {
        let mut prompt = format!(
            "{}, {} angle, {}",
            request.shot_description,
            request.camera,
            request.style.cue()
        );

        if let Some(title) = non_empty(&request.title) {
            prompt = format!("Scene: {}. {}", title, prompt);
        }

        if let Some(context) = non_empty(&request.previous_context) {
            prompt = format!("{}. IMPORTANT: Maintain visual continuity - {}", prompt, context);
        }

        let mut prompt = self.sanitizer.sanitize(&prompt);
        prompt.push_str(STORYBOARD_SUFFIX);

        if request.style == StyleTag::Meme {
            prompt.push_str(PARODY_WATERMARK);
        }

        prompt
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Generate a fresh seed: 13 lower-case alphanumeric characters.
pub fn generate_seed() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SEED_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// Renders frames through an image model.
#[derive(Debug, Clone)]
pub struct FrameRenderer<I> {
    generator: I,
    prompts: FramePromptBuilder,
    options: RenderOptions,
}

impl<I: ImageGenerator> FrameRenderer<I> {
    /// Create a renderer with the default sanitizer and square standard output.
    pub fn new(generator: I) -> Self {
        Self::with_options(generator, FramePromptBuilder::default(), RenderOptions::default())
    }

    /// Create a renderer with explicit prompt builder and output settings.
    pub fn with_options(generator: I, prompts: FramePromptBuilder, options: RenderOptions) -> Self {
        Self {
            generator,
            prompts,
            options,
        }
    }

    /// Borrow the underlying generator.
    pub fn generator(&self) -> &I {
        &self.generator
    }

    /// Borrow the prompt builder.
    pub fn prompts(&self) -> &FramePromptBuilder {
        &self.prompts
    }

    /// Render one frame.
    ///
    /// A seed supplied by the caller is echoed back unchanged; otherwise a
    /// new one is generated. The seed is not forwarded to the image model.
    #[instrument(
        skip(self, request),
        fields(
            style = %request.style,
            camera = %request.camera,
            model = self.generator.model_name(),
            has_context = request.previous_context.is_some()
        )
    )]
    pub async fn render(&self, request: &FrameRequest) -> GenFramesResult<RenderedFrame> {
        request.validate()?;

        let prompt = self.prompts.build(request);
        debug!(prompt = %prompt, "Generating frame");

        let image_request = ImageRequest::builder()
            .prompt(prompt.clone())
            .size(self.options.size.clone())
            .quality(self.options.quality.clone())
            .build()
            .map_err(|e| JsonError::new(format!("Failed to build image request: {}", e)))?;

        let image = self.generator.generate_image(&image_request).await?;

        let seed = match &request.seed {
            Some(seed) => seed.clone(),
            None => generate_seed(),
        };
        info!(seed = %seed, "Frame generated");

        Ok(RenderedFrame {
            frame: Frame {
                image_url: image.url,
                prompt,
                seed,
            },
            metadata: request.metadata(),
        })
    }
}
