//! Textual safety filter for image prompts.
//!
//! This is a best-effort keyword filter, not a content classifier: paraphrases
//! and terms missing from the lists pass through untouched.

use genframes_error::ConfigError;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Placeholder substituted for blocklisted terms.
pub const BLOCKED_PLACEHOLDER: &str = "[CONTENT]";

/// Placeholder substituted for brand names.
pub const BRAND_PLACEHOLDER: &str = "BrandX";

/// Placeholder substituted for named public figures.
pub const FIGURE_PLACEHOLDER: &str = "Famous Actor";

/// Term lists used by the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Terms replaced wherever they occur, including inside longer words
    #[serde(default = "default_blocked_terms")]
    pub blocked_terms: Vec<String>,

    /// Brand names replaced as whole words
    #[serde(default = "default_brands")]
    pub brands: Vec<String>,

    /// Public figures replaced as whole words
    #[serde(default = "default_public_figures")]
    pub public_figures: Vec<String>,
}

fn default_blocked_terms() -> Vec<String> {
    [
        "explicit",
        "nude",
        "sexual",
        "violence",
        "gore",
        "drug",
        "weapon",
        "celebrity",
        "politician",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_brands() -> Vec<String> {
    ["coca-cola", "pepsi", "mcdonalds", "apple", "google", "facebook"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_public_figures() -> Vec<String> {
    ["brad pitt", "angelina jolie", "leonardo dicaprio", "will smith"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            blocked_terms: default_blocked_terms(),
            brands: default_brands(),
            public_figures: default_public_figures(),
        }
    }
}

/// Compiled prompt sanitizer.
///
/// Text that already spells a placeholder exactly (`[CONTENT]`, `BrandX`,
/// `Famous Actor`) is kept verbatim. Everything between those spans is
/// lower-cased, then blocklisted terms, brands and public figures are
/// replaced, in that order. Sanitizing twice is the same as once.
///
/// # Examples
///
/// ```
/// use genframes_security::PromptSanitizer;
///
/// let sanitizer = PromptSanitizer::default();
/// let clean = sanitizer.sanitize("A Violence scene outside Apple HQ");
/// assert_eq!(clean, "a [CONTENT] scene outside BrandX hq");
/// assert_eq!(sanitizer.sanitize(&clean), clean);
/// ```
#[derive(Debug, Clone)]
pub struct PromptSanitizer {
    blocked: Vec<Regex>,
    brands: Option<Regex>,
    figures: Option<Regex>,
    placeholders: Regex,
}

impl PromptSanitizer {
    /// Compile a sanitizer from term lists.
    pub fn new(config: &SanitizerConfig) -> Result<Self, ConfigError> {
        let blocked = config
            .blocked_terms
            .iter()
            .filter(|term| !term.is_empty())
            .map(|term| compile(&regex::escape(term)))
            .collect::<Result<Vec<_>, _>>()?;

        let brands = whole_words(&config.brands)?;
        let figures = whole_words(&config.public_figures)?;

        let placeholders = [BLOCKED_PLACEHOLDER, BRAND_PLACEHOLDER, FIGURE_PLACEHOLDER]
            .map(regex::escape)
            .join("|");
        let placeholders = Regex::new(&placeholders)
            .map_err(|e| ConfigError::new(format!("Invalid placeholder pattern: {}", e)))?;

        Ok(Self {
            blocked,
            brands,
            figures,
            placeholders,
        })
    }

    /// Return the cleaned prompt.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub fn sanitize(&self, prompt: &str) -> String {
        let mut clean = String::with_capacity(prompt.len());
        let mut last = 0;
        for placeholder in self.placeholders.find_iter(prompt) {
            clean.push_str(&self.clean_span(&prompt[last..placeholder.start()]));
            clean.push_str(placeholder.as_str());
            last = placeholder.end();
        }
        clean.push_str(&self.clean_span(&prompt[last..]));
        clean
    }

    fn clean_span(&self, span: &str) -> String {
        let mut clean = span.to_lowercase();

        for regex in &self.blocked {
            if regex.is_match(&clean) {
                debug!(pattern = regex.as_str(), "Replacing blocked term");
                clean = regex.replace_all(&clean, BLOCKED_PLACEHOLDER).into_owned();
            }
        }

        if let Some(brands) = &self.brands {
            clean = brands.replace_all(&clean, BRAND_PLACEHOLDER).into_owned();
        }
        if let Some(figures) = &self.figures {
            clean = figures.replace_all(&clean, FIGURE_PLACEHOLDER).into_owned();
        }

        clean
    }
}

impl Default for PromptSanitizer {
    fn default() -> Self {
        DEFAULT_SANITIZER.clone()
    }
}

static DEFAULT_SANITIZER: LazyLock<PromptSanitizer> = LazyLock::new(|| {
    PromptSanitizer::new(&SanitizerConfig::default()).expect("Valid default sanitizer patterns")
});

/// Sanitize with the built-in term lists.
pub fn sanitize(prompt: &str) -> String {
    DEFAULT_SANITIZER.sanitize(prompt)
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid sanitizer pattern '{}': {}", pattern, e)))
}

fn whole_words(terms: &[String]) -> Result<Option<Regex>, ConfigError> {
    let alternatives: Vec<String> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| regex::escape(term))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    compile(&format!(r"\b(?:{})\b", alternatives.join("|"))).map(Some)
}
