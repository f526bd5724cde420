//! Visual rendering styles.

use serde::{Deserialize, Serialize};

/// Rendering style applied uniformly to every frame of a project.
///
/// # Examples
///
/// ```
/// use genframes_core::StyleTag;
/// use std::str::FromStr;
///
/// assert_eq!(StyleTag::default(), StyleTag::Realistic);
/// assert_eq!(StyleTag::from_str("noir").unwrap(), StyleTag::Noir);
/// assert_eq!(StyleTag::Anime.to_string(), "anime");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StyleTag {
    /// Photorealistic film still
    #[default]
    Realistic,
    /// Hand-drawn pencil storyboard
    Pencil,
    /// 1940s black-and-white film noir
    Noir,
    /// Cel-shaded Japanese animation
    Anime,
    /// Satirical cartoon, watermarked as parody
    Meme,
}

impl StyleTag {
    /// Fixed cue phrase appended to every image prompt in this style.
    pub fn cue(&self) -> &'static str {
        match self {
            Self::Realistic => "photorealistic, cinematic lighting, high detail, film still",
            Self::Pencil => {
                "pencil sketch, hand-drawn, black and white, storyboard style, clean lines"
            }
            Self::Noir => {
                "film noir style, black and white, dramatic shadows, high contrast, 1940s cinematography"
            }
            Self::Anime => {
                "anime style, cel-shaded, Japanese animation, vibrant colors, dynamic composition"
            }
            Self::Meme => {
                "cartoon style, exaggerated expressions, internet meme aesthetic, satirical"
            }
        }
    }

    /// Display label used in the exported storyboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Pencil => "Pencil Sketch",
            Self::Noir => "Film Noir",
            Self::Anime => "Anime",
            Self::Meme => "Meme",
        }
    }
}
