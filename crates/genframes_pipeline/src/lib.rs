//! Storyboard pipeline for GenFrames.
//!
//! A scene script flows through these stages:
//!
//! 1. [`ScriptParser`] asks a text model for a shot list, falling back to a
//!    fixed three-shot breakdown when the reply is unusable.
//! 2. [`continuity_context`] derives hints from the shots preceding each one.
//! 3. [`FramePromptBuilder`] assembles the image prompt and
//!    [`FrameRenderer`] sends it to an image model.
//! 4. [`Storyboard`] collects frames, either one at a time or through
//!    [`render_batch`], and [`export_html`] writes the result out.
//!
//! Models are reached only through the [`TextGenerator`] and
//! [`ImageGenerator`] traits.
//!
//! [`TextGenerator`]: genframes_interface::TextGenerator
//! [`ImageGenerator`]: genframes_interface::ImageGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod continuity;
mod export;
mod frame;
mod parser;
mod storyboard;

pub use continuity::{
    CONTINUITY_RULES, CONTINUITY_WINDOW, ContinuityRule, MAX_CONTINUITY_PHRASES,
    continuity_context,
};
pub use export::{escape_html, export_file_name, export_html, render_html};
pub use frame::{
    FramePromptBuilder, FrameRenderer, PARODY_WATERMARK, RenderOptions, SEED_LEN,
    STORYBOARD_SUFFIX, generate_seed,
};
pub use parser::{
    DEFAULT_PARSE_MAX_TOKENS, DEFAULT_PARSE_TEMPERATURE, ParserOptions, ScriptParser,
    build_parse_prompt, decode_shot_list, extract_json, fallback_shots,
};
pub use storyboard::{BatchOutcome, DEFAULT_FRAME_DELAY, Storyboard, render_batch};
