//! Storyboard assembly and batch frame generation.

use crate::{FrameRenderer, continuity_context};
use derive_getters::Getters;
use genframes_core::{Frame, FrameRequest, RenderedFrame, Shot, StyleTag};
use genframes_error::{GenFramesError, GenFramesResult};
use genframes_interface::ImageGenerator;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Pause between consecutive frame requests in a batch.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(1000);

/// Parsed shots of one project and the frames rendered for them so far.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Storyboard {
    /// Style applied to every frame
    style: StyleTag,
    /// Shots in order
    shots: Vec<Shot>,
    /// Frames keyed by shot order
    frames: BTreeMap<u32, Frame>,
}

impl Storyboard {
    /// Start a storyboard with no frames.
    pub fn new(style: StyleTag, shots: Vec<Shot>) -> Self {
        Self {
            style,
            shots,
            frames: BTreeMap::new(),
        }
    }

    /// Frame for the shot with the given order, if rendered.
    pub fn frame(&self, order: u32) -> Option<&Frame> {
        self.frames.get(&order)
    }

    /// Store a frame, replacing any earlier one for the same shot.
    pub fn set_frame(&mut self, order: u32, frame: Frame) {
        self.frames.insert(order, frame);
    }

    /// Whether any frame has been rendered.
    pub fn has_frames(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Shots that have a frame, paired with it, in shot order.
    pub fn rendered(&self) -> impl Iterator<Item = (&Shot, &Frame)> {
        self.shots
            .iter()
            .filter_map(|shot| self.frames.get(&shot.order).map(|frame| (shot, frame)))
    }

    /// Request for rendering the shot at `index`, with continuity from its predecessors.
    pub fn frame_request(&self, index: usize) -> Option<FrameRequest> {
        let shot = self.shots.get(index)?;
        Some(FrameRequest::for_shot(
            shot,
            self.style,
            continuity_context(&self.shots, index),
        ))
    }

    /// Render (or re-render) the frame for the shot at `index`.
    pub async fn render_shot<I: ImageGenerator>(
        &mut self,
        renderer: &FrameRenderer<I>,
        index: usize,
    ) -> GenFramesResult<Option<&Frame>> {
        let Some(request) = self.frame_request(index) else {
            return Ok(None);
        };
        let order = self.shots[index].order;
        let rendered = renderer.render(&request).await?;
        self.set_frame(order, rendered.frame);
        Ok(self.frames.get(&order))
    }

    /// Render every shot in sequence, storing each frame as it arrives.
    ///
    /// Stops at the first failure. Frames rendered before it are kept.
    #[instrument(skip(self, renderer), fields(shots = self.shots.len(), style = %self.style))]
    pub async fn render_all<I: ImageGenerator>(
        &mut self,
        renderer: &FrameRenderer<I>,
        delay: Duration,
    ) -> BatchOutcome {
        let outcome = render_batch(renderer, &self.shots, self.style, delay).await;
        for (shot, rendered) in self.shots.iter().zip(&outcome.frames) {
            self.frames.insert(shot.order, rendered.frame.clone());
        }
        outcome
    }
}

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Frames in shot order, one per shot up to the failure
    pub frames: Vec<RenderedFrame>,
    /// The failure that stopped the batch, if any
    pub error: Option<GenFramesError>,
}

impl BatchOutcome {
    /// Whether every shot was rendered.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Convert to a `Result`, discarding partial frames on failure.
    pub fn into_result(self) -> GenFramesResult<Vec<RenderedFrame>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.frames),
        }
    }
}

/// Render `shots` one after another with `delay` between requests.
///
/// No delay follows the last request. The first failure ends the run.
pub async fn render_batch<I: ImageGenerator>(
    renderer: &FrameRenderer<I>,
    shots: &[Shot],
    style: StyleTag,
    delay: Duration,
) -> BatchOutcome {
    let mut frames = Vec::with_capacity(shots.len());

    for (index, shot) in shots.iter().enumerate() {
        let request = FrameRequest::for_shot(shot, style, continuity_context(shots, index));
        match renderer.render(&request).await {
            Ok(rendered) => frames.push(rendered),
            Err(e) => {
                warn!(order = shot.order, error = %e, "Frame generation failed, stopping batch");
                return BatchOutcome {
                    frames,
                    error: Some(e),
                };
            }
        }

        if index + 1 < shots.len() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    info!("Rendered {} frames", frames.len());
    BatchOutcome {
        frames,
        error: None,
    }
}
