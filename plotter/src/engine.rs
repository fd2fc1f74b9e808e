//! Interaction engine: turns per-tick input into viewport and stroke updates.
//!
//! [`InteractionEngine::tick`] runs once per frame and never suspends. Within
//! a tick the order is fixed: discrete events (quit, draw-mode toggle, wheel
//! zoom), then the primary-button gesture, then the undo chord, then the
//! stroke render step against the viewport as it stands after all updates.
//!
//! The engine exclusively owns the [`Viewport`] and the [`StrokeStore`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::color::{self, Rgba};
use crate::config::EngineConfig;
use crate::error::PlotError;
use crate::input::{Button, ButtonEdge, GestureState, InputEvent, InputSnapshot};
use crate::render::{self, RenderCommand};
use crate::stroke::StrokeStore;
use crate::viewport::{Point, Viewport, ZoomDirection};

pub struct InteractionEngine {
    viewport: Viewport,
    strokes: StrokeStore,
    current_stroke: Vec<Point>,
    gesture: GestureState,
    draw_mode: bool,
    stroke_color: Rgba,
    config: EngineConfig,
}

impl InteractionEngine {
    /// Take ownership of `viewport` and start idle, in pan mode.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidColor`] if the stroke color does not
    /// resolve, or [`PlotError::InvalidConfig`] if the zoom factor is not in
    /// `(0, 1)`.
    pub fn new(viewport: Viewport, config: EngineConfig) -> Result<Self, PlotError> {
        if !(config.zoom_factor > 0.0 && config.zoom_factor < 1.0) {
            return Err(PlotError::InvalidConfig {
                var: "zoom_factor".into(),
                value: config.zoom_factor.to_string(),
            });
        }
        let stroke_color = color::resolve(&config.stroke_color, 1.0)?;
        Ok(Self {
            viewport,
            strokes: StrokeStore::new(),
            current_stroke: Vec::new(),
            gesture: GestureState::Idle,
            draw_mode: false,
            stroke_color,
            config,
        })
    }

    // --- Per-frame entry point ---

    /// Consume one input snapshot and return this frame's commands.
    ///
    /// The result holds `Quit` first if the user asked to quit, followed by
    /// one polyline per renderable stroke.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if a pointer position cannot be
    /// mapped into data space.
    pub fn tick(&mut self, input: &InputSnapshot) -> Result<Vec<RenderCommand>, PlotError> {
        let mut commands = Vec::new();
        if self.handle_events(input) {
            commands.push(RenderCommand::Quit);
        }
        self.handle_gesture(input)?;
        self.handle_undo(input);
        commands.extend(self.render()?);
        Ok(commands)
    }

    /// Stroke polylines for the current state, live stroke last.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidViewport`] if the limits are degenerate.
    pub fn render(&self) -> Result<Vec<RenderCommand>, PlotError> {
        let live = match self.gesture {
            GestureState::Drawing => Some(self.current_stroke.as_slice()),
            _ => None,
        };
        render::strokes(&self.viewport, &self.strokes, live, self.stroke_color, self.config.stroke_width)
    }

    // --- Discrete events ---

    /// Apply quit, toggle, and wheel events. Returns whether quit was requested.
    fn handle_events(&mut self, input: &InputSnapshot) -> bool {
        let mut quit = false;
        for event in &input.events {
            match event {
                InputEvent::Quit => quit = true,
                InputEvent::KeyDown(key) if *key == self.config.bindings.quit => quit = true,
                InputEvent::KeyDown(key) if *key == self.config.bindings.toggle_draw => {
                    self.toggle_draw_mode();
                }
                InputEvent::Wheel(direction) => self.zoom((*direction).into()),
                _ => {}
            }
        }
        if quit {
            tracing::info!("quit requested");
        }
        quit
    }

    /// Flip draw mode. An active gesture keeps its kind until release.
    pub fn toggle_draw_mode(&mut self) {
        self.draw_mode = !self.draw_mode;
        tracing::info!(draw_mode = self.draw_mode, "draw mode toggled");
    }

    pub fn set_draw_mode(&mut self, draw_mode: bool) {
        self.draw_mode = draw_mode;
    }

    /// Zoom one step with the configured factor. A step that would collapse
    /// the limits is dropped and logged; the viewport stays as it was.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        if let Err(e) = self.viewport.zoom(direction, self.config.zoom_factor) {
            tracing::warn!(error = %e, ?direction, "zoom step rejected");
        }
    }

    // --- Gesture state machine ---

    /// Primary-button edges apply in arrival order: down begins a gesture
    /// (closing any active one first), up ends it. A tick with no down edge
    /// then continues the gesture while the button is held, or ends it when
    /// the button is no longer held and the up event went missing.
    fn handle_gesture(&mut self, input: &InputSnapshot) -> Result<(), PlotError> {
        let mut began = false;
        for edge in input.button_edges(Button::Primary) {
            match edge {
                ButtonEdge::Down => {
                    if self.gesture != GestureState::Idle {
                        self.end_gesture();
                    }
                    self.begin_gesture(input)?;
                    began = true;
                }
                ButtonEdge::Up => {
                    if self.gesture != GestureState::Idle {
                        self.end_gesture();
                    }
                }
            }
        }

        if began || self.gesture == GestureState::Idle {
            return Ok(());
        }
        if input.is_held(Button::Primary) {
            self.continue_gesture(input)?;
        } else {
            self.end_gesture();
        }
        Ok(())
    }

    fn begin_gesture(&mut self, input: &InputSnapshot) -> Result<(), PlotError> {
        let position = self.viewport.pixel_to_data(input.pointer)?;
        if self.draw_mode {
            self.current_stroke.clear();
            self.current_stroke.push(position);
            self.gesture = GestureState::Drawing;
        } else {
            self.gesture = GestureState::Panning { last_pointer: position };
        }
        tracing::debug!(gesture = ?self.gesture, "gesture started");
        Ok(())
    }

    fn continue_gesture(&mut self, input: &InputSnapshot) -> Result<(), PlotError> {
        match self.gesture {
            GestureState::Idle => {}
            GestureState::Panning { last_pointer } => {
                let current = self.viewport.pixel_to_data(input.pointer)?;
                if let Err(e) = self.viewport.pan(last_pointer - current) {
                    tracing::warn!(error = %e, "pan step rejected");
                }
                let last_pointer = self.viewport.pixel_to_data(input.pointer)?;
                self.gesture = GestureState::Panning { last_pointer };
            }
            GestureState::Drawing => {
                let position = self.viewport.pixel_to_data(input.pointer)?;
                if self.current_stroke.last() != Some(&position) {
                    self.current_stroke.push(position);
                }
            }
        }
        Ok(())
    }

    fn end_gesture(&mut self) {
        if self.gesture == GestureState::Drawing {
            let points = std::mem::take(&mut self.current_stroke);
            let len = points.len();
            if self.strokes.commit(points) {
                tracing::info!(points = len, strokes = self.strokes.len(), "stroke committed");
            }
        }
        tracing::debug!(gesture = ?self.gesture, "gesture ended");
        self.gesture = GestureState::Idle;
    }

    // --- Undo ---

    fn handle_undo(&mut self, input: &InputSnapshot) {
        let bindings = &self.config.bindings;
        let edge = input.key_pressed(&bindings.undo_modifier) || input.key_pressed(&bindings.undo_key);
        if edge && input.key_down(&bindings.undo_modifier) && input.key_down(&bindings.undo_key) {
            self.undo();
        }
    }

    /// Remove the most recent committed stroke. The live stroke is untouched.
    /// Returns whether a stroke was removed.
    pub fn undo(&mut self) -> bool {
        let removed = self.strokes.undo().is_some();
        if removed {
            tracing::info!(strokes = self.strokes.len(), "stroke undone");
        }
        removed
    }

    // --- Queries ---

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn strokes(&self) -> &StrokeStore {
        &self.strokes
    }

    /// Points of the stroke being drawn; empty when not drawing.
    #[must_use]
    pub fn current_stroke(&self) -> &[Point] {
        &self.current_stroke
    }

    #[must_use]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
