//! Per-frame render driver.
//!
//! A [`Screen`] collects the caller's curves and points for the current
//! frame, runs one engine tick on [`Screen::update`], and then flushes
//! everything to the backend: queued items first, strokes on top, then
//! `present`, then the background fill that opens the next frame.
//!
//! Queued items are kept in data space and mapped after the tick, so curves
//! and strokes in one frame always share the same viewport.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::color::{self, ColorSpec, Rgba};
use crate::config::{EngineConfig, ScreenConfig};
use crate::engine::InteractionEngine;
use crate::error::PlotError;
use crate::input::InputSnapshot;
use crate::render::{self, Backend, RenderCommand};
use crate::viewport::{PixelPoint, Point, Viewport};

/// What the caller should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// The user asked to quit during this frame.
    Quit,
}

#[derive(Debug, Clone)]
enum Queued {
    Curve { points: Vec<Point>, color: Rgba, width: u32 },
    Circle { center: Point, radius: u32, color: Rgba },
}

pub struct Screen<B: Backend> {
    engine: InteractionEngine,
    backend: B,
    background: Rgba,
    queued: Vec<Queued>,
}

impl<B: Backend> Screen<B> {
    /// Build the viewport and engine, and open the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] for a bad size or limits and
    /// [`PlotError::InvalidColor`] for an unresolvable background or stroke
    /// color.
    pub fn new(screen: ScreenConfig, engine: EngineConfig, mut backend: B) -> Result<Self, PlotError> {
        let viewport = Viewport::new(screen.size, screen.x_limits, screen.y_limits)?;
        let background = color::resolve(&screen.background, 1.0)?;
        let engine = InteractionEngine::new(viewport, engine)?;
        backend.fill_background(background);
        tracing::debug!(size = ?screen.size, x = ?screen.x_limits, y = ?screen.y_limits, "screen created");
        Ok(Self { engine, backend, background, queued: Vec::new() })
    }

    /// Queue a curve through `(xs[i], ys[i])` for this frame.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LengthMismatch`] if the slices differ in length
    /// and [`PlotError::InvalidColor`] if `color` does not resolve.
    pub fn plot(&mut self, xs: &[f64], ys: &[f64], color: &ColorSpec, width: u32) -> Result<(), PlotError> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        let points = xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect();
        self.plot_points(points, color, width)
    }

    /// Queue a curve through `points` for this frame.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidColor`] if `color` does not resolve.
    pub fn plot_points(&mut self, points: Vec<Point>, color: &ColorSpec, width: u32) -> Result<(), PlotError> {
        let color = color::resolve(color, 1.0)?;
        self.queued.push(Queued::Curve { points, color, width });
        Ok(())
    }

    /// Queue a filled circle centred on a data-space point.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidColor`] if `color` does not resolve.
    pub fn draw_circle(&mut self, center: Point, color: &ColorSpec, radius: u32) -> Result<(), PlotError> {
        let color = color::resolve(color, 1.0)?;
        self.draw_circle_rgba(center, color, radius);
        Ok(())
    }

    /// Queue a filled circle with an already resolved color.
    pub fn draw_circle_rgba(&mut self, center: Point, color: Rgba, radius: u32) {
        self.queued.push(Queued::Circle { center, radius, color });
    }

    /// Run one tick and flush the frame to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if mapping fails. Queued items
    /// are dropped in that case.
    pub fn update(&mut self, input: &InputSnapshot) -> Result<FrameStatus, PlotError> {
        let queued = std::mem::take(&mut self.queued);
        let commands = self.engine.tick(input)?;
        let viewport = self.engine.viewport();

        for item in queued {
            match item {
                Queued::Curve { points, color, width } => {
                    if let Some(cmd) = render::polyline(viewport, &points, color, width)? {
                        self.backend.execute(&cmd);
                    }
                }
                Queued::Circle { center, radius, color } => {
                    let center = viewport.data_to_pixel(center)?;
                    self.backend.draw_filled_circle(center, radius, color);
                }
            }
        }

        let mut status = FrameStatus::Continue;
        for cmd in &commands {
            if *cmd == RenderCommand::Quit {
                status = FrameStatus::Quit;
            }
            self.backend.execute(cmd);
        }

        self.backend.present();
        self.backend.fill_background(self.background);
        Ok(status)
    }

    /// Data-space position of a pixel pointer under the current limits.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if the limits are degenerate.
    pub fn mouse_position(&self, pointer: PixelPoint) -> Result<Point, PlotError> {
        self.engine.viewport().pixel_to_data(pointer)
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.engine.viewport()
    }

    #[must_use]
    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut InteractionEngine {
        &mut self.engine
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
