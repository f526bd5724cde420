//! Core data types for the GenFrames storyboard service.
//!
//! Shots, frames, styles, the endpoint wire types and the provider-neutral
//! model request types shared by every other crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod frame;
mod generation;
mod plan;
mod shot;
mod style;

pub use api::{
    ErrorResponse, FrameRequest, FrameResponse, MIN_SCRIPT_CHARS, MIN_SHOT_DESCRIPTION_CHARS,
    ParseRequest, ParseResponse,
};
pub use frame::{Frame, FrameMetadata, RenderedFrame};
pub use generation::{
    CompletionRequest, CompletionRequestBuilder, GeneratedImage, ImageRequest,
    ImageRequestBuilder,
};
pub use plan::{Plan, PlanLimits, UsageSnapshot};
pub use shot::{Shot, ShotList, ShotOutline};
pub use style::StyleTag;
