//! Rendered frame types.

use crate::StyleTag;
use serde::{Deserialize, Serialize};

/// Rendered image for a single shot, with the prompt and seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// URL of the generated image
    pub image_url: String,
    /// Final text sent to the image model
    pub prompt: String,
    /// Reproducibility token
    pub seed: String,
}

/// Echo of the inputs a frame was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMetadata {
    /// Style applied to the prompt
    pub style: StyleTag,
    /// Camera label as supplied
    pub camera: String,
    /// Shot description before prompt construction
    pub original_description: String,
}

/// A frame together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderedFrame {
    /// The rendered frame
    pub frame: Frame,
    /// Inputs it was rendered from
    pub metadata: FrameMetadata,
}
