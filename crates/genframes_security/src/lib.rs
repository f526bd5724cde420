//! Prompt safety filtering for GenFrames.
//!
//! Image prompts are passed through [`PromptSanitizer`] before they reach the
//! image model. The filter lower-cases the prompt and swaps blocklisted terms,
//! brand names and public figures for neutral placeholders.
//!
//! Known limitation: matching is purely textual. Misspellings, paraphrases and
//! terms absent from the lists are not caught.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod sanitizer;

pub use sanitizer::{
    BLOCKED_PLACEHOLDER, BRAND_PLACEHOLDER, FIGURE_PLACEHOLDER, PromptSanitizer, SanitizerConfig,
    sanitize,
};
