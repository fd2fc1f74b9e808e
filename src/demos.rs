//! Built-in animated demos.

#[cfg(test)]
#[path = "demos_test.rs"]
mod demos_test;

use plotter::PlotError;
use plotter::animation::{AnimationState, Trail};
use plotter::color::{ColorMapper, ColorSpec};
use plotter::config::ScreenConfig;
use plotter::consts::DEFAULT_LINE_WIDTH;
use plotter::render::Backend;
use plotter::screen::Screen;
use plotter::viewport::Limits;

use crate::presets::Preset;

/// Radius of each attractor point, in pixels.
const ORBIT_POINT_RADIUS: u32 = 2;

/// Something that queues one frame's worth of drawing on a screen.
pub trait Demo {
    /// Screen layout for this demo. Size and background come from `base`.
    fn screen_config(&self, base: ScreenConfig) -> ScreenConfig;

    /// Queue the current frame and step the animation.
    ///
    /// # Errors
    ///
    /// Returns the first error from the screen.
    fn draw<B: Backend>(&mut self, screen: &mut Screen<B>) -> Result<(), PlotError>;
}

/// Travelling sine wave over a pair of axes.
#[derive(Debug)]
pub struct Wave {
    xs: Vec<f64>,
    state: AnimationState,
}

impl Wave {
    pub fn new(frame_rate: u32) -> Self {
        Self { xs: linspace(-3.0, 3.0, 101), state: AnimationState::at_frame_rate(frame_rate) }
    }
}

impl Demo for Wave {
    fn screen_config(&self, base: ScreenConfig) -> ScreenConfig {
        ScreenConfig { x_limits: Limits::new(-5.0, 5.0), y_limits: Limits::new(-5.0, 5.0), ..base }
    }

    fn draw<B: Backend>(&mut self, screen: &mut Screen<B>) -> Result<(), PlotError> {
        let white = ColorSpec::from("white");
        screen.plot(&[-3.0, 3.0], &[0.0, 0.0], &white, DEFAULT_LINE_WIDTH)?;
        screen.plot(&[0.0, 0.0], &[-3.0, 3.0], &white, DEFAULT_LINE_WIDTH)?;

        let t = self.state.t;
        let ys: Vec<f64> = self.xs.iter().map(|x| (3.0 * (x - t)).sin()).collect();
        screen.plot(&self.xs, &ys, &white, DEFAULT_LINE_WIDTH)?;
        self.state.advance();
        Ok(())
    }
}

/// Orbits of an iterated map swept through time, with fading trails.
#[derive(Debug)]
pub struct Attractor {
    preset: Preset,
    trail: Trail,
    /// One mapper per trail age; older orbits are more transparent.
    mappers: Vec<ColorMapper>,
    state: AnimationState,
}

impl Attractor {
    /// Sweep the preset's time window over `frames` frames.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::UnknownColormap`] if the trail colormap is missing.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(preset: Preset, frames: u64) -> Result<Self, PlotError> {
        let trail = Trail::new(preset.trail_length);
        let mappers = (0..trail.capacity())
            .map(|age| ColorMapper::new("hsv", 0.0, preset.n_iters as f64, trail.fade(age)))
            .collect::<Result<Vec<_>, _>>()?;
        let state = AnimationState::sweep(preset.t0, preset.t1, frames);
        Ok(Self { preset, trail, mappers, state })
    }
}

impl Demo for Attractor {
    fn screen_config(&self, base: ScreenConfig) -> ScreenConfig {
        ScreenConfig { x_limits: self.preset.x_limits, y_limits: self.preset.y_limits, ..base }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<B: Backend>(&mut self, screen: &mut Screen<B>) -> Result<(), PlotError> {
        // Derived from the frame index so long sweeps do not drift off t1.
        let t = self.state.time_at(self.preset.t0, self.state.frame);
        let orbit = self.preset.system.orbit(t, self.preset.n_iters);
        self.trail.push(orbit);

        let viewport = screen.viewport().clone();
        for (orbit, mapper) in self.trail.iter().zip(&self.mappers) {
            for (i, point) in orbit.iter().enumerate() {
                if viewport.contains(*point) {
                    screen.draw_circle_rgba(*point, mapper.map(i as f64), ORBIT_POINT_RADIUS);
                }
            }
        }
        self.state.advance();
        Ok(())
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
