//! Layered service configuration.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use genframes_core::Plan;
use genframes_error::{ConfigError, GenFramesResult};
use genframes_models::OpenAiConfig;
use genframes_pipeline::{ParserOptions, RenderOptions};
use genframes_security::SanitizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Defaults compiled into the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../genframes.toml");

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const ENV_PREFIX: &str = "GENFRAMES";

/// HTTP listener and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
}

impl ServerConfig {
    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Model provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// API key; empty means "use `OPENAI_API_KEY`"
    #[serde(default)]
    pub api_key: String,
    /// Model used for script parsing
    pub text_model: String,
    /// Model used for frame rendering
    pub image_model: String,
    /// Image resolution
    pub image_size: String,
    /// Image quality tier
    pub image_quality: String,
    /// Parse sampling temperature
    pub temperature: f32,
    /// Parse reply token ceiling
    pub max_tokens: u32,
}

/// Batch pacing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Milliseconds between consecutive frame requests
    pub frame_delay_ms: u64,
}

/// Plan budget settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Reject requests once the plan budget is spent
    pub enforce: bool,
    /// Plan whose limits apply
    pub plan: Plan,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenFramesConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Model provider
    pub provider: ProviderConfig,
    /// Batch pacing
    pub pacing: PacingConfig,
    /// Plan limits
    pub limits: LimitsConfig,
    /// Prompt sanitizer term lists
    #[serde(default)]
    pub safety: SanitizerConfig,
}

impl GenFramesConfig {
    /// Load configuration.
    ///
    /// Precedence, lowest first: bundled defaults,
    /// `~/.config/genframes/genframes.toml`, `./genframes.toml`, then
    /// `GENFRAMES__SECTION__KEY` environment variables.
    #[instrument]
    pub fn load() -> GenFramesResult<Self> {
        debug!("Loading configuration: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config/genframes/genframes.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("genframes").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Ok(finish(builder)?)
    }

    /// Load bundled defaults overlaid with a single file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GenFramesResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        Ok(finish(builder)?)
    }

    /// Load bundled defaults overlaid with TOML text.
    pub fn from_toml_str(toml: &str) -> GenFramesResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Ok(finish(builder)?)
    }

    /// Resolve the provider API key, falling back to `OPENAI_API_KEY`.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        self.api_key_or(std::env::var(API_KEY_ENV).ok())
    }

    /// Resolve the provider API key with an explicit fallback value.
    #[track_caller]
    pub fn api_key_or(&self, fallback: Option<String>) -> Result<String, ConfigError> {
        let configured = self.provider.api_key.trim();
        if !configured.is_empty() {
            return Ok(configured.to_string());
        }
        match fallback.map(|key| key.trim().to_string()) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::new(format!(
                "Missing API key: set provider.api_key, {}__PROVIDER__API_KEY or {}",
                ENV_PREFIX, API_KEY_ENV
            ))),
        }
    }

    /// Client configuration for the given key.
    pub fn openai_config(&self, api_key: impl Into<String>) -> OpenAiConfig {
        OpenAiConfig::new(api_key)
            .with_base_url(self.provider.base_url.clone())
            .with_text_model(self.provider.text_model.clone())
            .with_image_model(self.provider.image_model.clone())
    }

    /// Options for the script parser.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            temperature: self.provider.temperature,
            max_tokens: self.provider.max_tokens,
        }
    }

    /// Options for the frame renderer.
    ///
    /// High-definition quality is downgraded to `standard` when the plan
    /// does not include it.
    pub fn render_options(&self) -> RenderOptions {
        let mut quality = self.provider.image_quality.clone();
        if quality.eq_ignore_ascii_case("hd") && !*self.limits.plan.limits().hi_res() {
            warn!(plan = %self.limits.plan, "Plan does not include hi-res frames, using standard quality");
            quality = "standard".to_string();
        }
        RenderOptions {
            size: self.provider.image_size.clone(),
            quality,
        }
    }

    /// Pause between frames in a batch.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.pacing.frame_delay_ms)
    }
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<GenFramesConfig, ConfigError> {
    builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
}
