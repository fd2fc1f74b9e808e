//! Rendering: draw commands, the backend seam, and the stroke render step.
//!
//! The core never touches pixels. It produces [`RenderCommand`]s and hands
//! them to a [`Backend`], which owns the actual surface. The stroke render
//! step reads strokes and the viewport and mutates nothing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::color::Rgba;
use crate::error::PlotError;
use crate::stroke::{Stroke, StrokeStore};
use crate::viewport::{PixelPoint, Point, Viewport};

/// One drawing instruction for the backend, or a signal for the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    FillBackground { color: Rgba },
    Polyline { points: Vec<PixelPoint>, color: Rgba, width: u32 },
    FilledCircle { center: PixelPoint, radius: u32, color: Rgba },
    Present,
    /// The user asked to quit. Not a drawing instruction; the caller decides
    /// what to do with it.
    Quit,
}

/// Drawing primitives supplied by the surface owner.
pub trait Backend {
    fn fill_background(&mut self, color: Rgba);
    fn draw_polyline(&mut self, points: &[PixelPoint], color: Rgba, width: u32);
    fn draw_filled_circle(&mut self, center: PixelPoint, radius: u32, color: Rgba);
    fn present(&mut self);

    /// Dispatch one command. `Quit` draws nothing.
    fn execute(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::FillBackground { color } => self.fill_background(*color),
            RenderCommand::Polyline { points, color, width } => self.draw_polyline(points, *color, *width),
            RenderCommand::FilledCircle { center, radius, color } => {
                self.draw_filled_circle(*center, *radius, *color);
            }
            RenderCommand::Present => self.present(),
            RenderCommand::Quit => {}
        }
    }
}

/// A backend that keeps every command, grouped into presented frames.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    frames: Vec<Vec<RenderCommand>>,
    pending: Vec<RenderCommand>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames closed by `present`, oldest first. Each ends with `Present`.
    #[must_use]
    pub fn frames(&self) -> &[Vec<RenderCommand>] {
        &self.frames
    }

    /// Hand over recorded frames and start fresh.
    pub fn take_frames(&mut self) -> Vec<Vec<RenderCommand>> {
        std::mem::take(&mut self.frames)
    }
}

impl Backend for RecordingBackend {
    fn fill_background(&mut self, color: Rgba) {
        self.pending.push(RenderCommand::FillBackground { color });
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], color: Rgba, width: u32) {
        self.pending.push(RenderCommand::Polyline { points: points.to_vec(), color, width });
    }

    fn draw_filled_circle(&mut self, center: PixelPoint, radius: u32, color: Rgba) {
        self.pending.push(RenderCommand::FilledCircle { center, radius, color });
    }

    fn present(&mut self) {
        self.pending.push(RenderCommand::Present);
        self.frames.push(std::mem::take(&mut self.pending));
    }
}

/// Polyline for a run of data points, or `None` if fewer than two.
///
/// # Errors
///
/// Returns [`PlotError::InvalidViewport`] if the viewport limits are degenerate.
pub fn polyline(viewport: &Viewport, points: &[Point], color: Rgba, width: u32) -> Result<Option<RenderCommand>, PlotError> {
    if points.len() < 2 {
        return Ok(None);
    }
    let points = viewport.data_to_pixel_batch(points)?;
    Ok(Some(RenderCommand::Polyline { points, color, width }))
}

/// Draw every committed stroke, then the live stroke if one is in progress.
///
/// Strokes with a single point produce nothing, not even a dot.
///
/// # Errors
///
/// Returns [`PlotError::InvalidViewport`] if the viewport limits are degenerate.
pub fn strokes<'a>(
    viewport: &Viewport,
    store: &'a StrokeStore,
    live: Option<&'a [Point]>,
    color: Rgba,
    width: u32,
) -> Result<Vec<RenderCommand>, PlotError> {
    let mut commands = Vec::with_capacity(store.len() + 1);
    for stroke in store.iter().map(Stroke::points).chain(live) {
        if let Some(cmd) = polyline(viewport, stroke, color, width)? {
            commands.push(cmd);
        }
    }
    Ok(commands)
}
