//! Shot types produced by the script parser.

use serde::{Deserialize, Serialize};

/// Shot as described by the text model, before it has a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShotOutline {
    /// Brief descriptive title
    pub title: String,
    /// What happens in the shot
    pub action: String,
    /// Camera angle or movement
    pub camera: String,
    /// Free-text duration estimate
    pub duration: String,
}

impl ShotOutline {
    /// Create an outline from its four fields.
    pub fn new(
        title: impl Into<String>,
        action: impl Into<String>,
        camera: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            action: action.into(),
            camera: camera.into(),
            duration: duration.into(),
        }
    }
}

/// One planned unit of a storyboard.
///
/// `order` is 1-based and matches the shot's position in its list.
///
/// # Examples
///
/// ```
/// use genframes_core::{Shot, ShotOutline};
///
/// let shots = Shot::number(vec![
///     ShotOutline::new("Reveal", "A car appears", "Wide shot", "3 seconds"),
///     ShotOutline::new("Crash", "It crashes", "Close-up", "2 seconds"),
/// ]);
/// assert_eq!(shots[0].order, 1);
/// assert_eq!(shots[1].order, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shot {
    /// Brief descriptive title
    pub title: String,
    /// What happens in the shot
    pub action: String,
    /// Camera angle or movement
    pub camera: String,
    /// Free-text duration estimate
    pub duration: String,
    /// 1-based position in the storyboard
    pub order: u32,
}

impl Shot {
    /// Create a shot from its fields.
    pub fn new(
        title: impl Into<String>,
        action: impl Into<String>,
        camera: impl Into<String>,
        duration: impl Into<String>,
        order: u32,
    ) -> Self {
        Self::from_outline(ShotOutline::new(title, action, camera, duration), order)
    }

    /// Attach a position to an outline.
    pub fn from_outline(outline: ShotOutline, order: u32) -> Self {
        Self {
            title: outline.title,
            action: outline.action,
            camera: outline.camera,
            duration: outline.duration,
            order,
        }
    }

    /// Number outlines densely from 1 in list order.
    pub fn number(outlines: Vec<ShotOutline>) -> Vec<Shot> {
        outlines
            .into_iter()
            .zip(1u32..)
            .map(|(outline, order)| Shot::from_outline(outline, order))
            .collect()
    }
}

/// The `{"shots": [...]}` envelope the text model is instructed to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotList {
    /// Shots in storyboard order
    pub shots: Vec<ShotOutline>,
}
