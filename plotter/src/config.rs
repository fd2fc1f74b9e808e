//! Engine and screen configuration with environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;
use crate::consts::{DEFAULT_LIMITS, DEFAULT_LINE_WIDTH, DEFAULT_PIXEL_SIZE, DEFAULT_ZOOM_FACTOR};
use crate::error::PlotError;
use crate::input::KeyBindings;
use crate::viewport::Limits;

/// Behaviour of the interaction engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Zoom step applied per wheel event.
    pub zoom_factor: f64,
    /// Color of committed and in-progress strokes.
    pub stroke_color: ColorSpec,
    /// Stroke line width in pixels.
    pub stroke_width: u32,
    pub bindings: KeyBindings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            stroke_color: ColorSpec::from("white"),
            stroke_width: DEFAULT_LINE_WIDTH,
            bindings: KeyBindings::default(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by environment variables.
    ///
    /// Optional:
    /// - `PLOT_ZOOM_FACTOR`: default 0.05
    /// - `PLOT_STROKE_COLOR`: hex, palette name, or JSON component array; default `white`
    /// - `PLOT_STROKE_WIDTH`: default 1
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidConfig`] if a variable is set but unparsable.
    pub fn from_env() -> Result<Self, PlotError> {
        Self::from_lookup(env_var)
    }

    /// Like [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidConfig`] if a variable is set but unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlotError> {
        let defaults = Self::default();
        Ok(Self {
            zoom_factor: parse_var(&lookup, "PLOT_ZOOM_FACTOR", defaults.zoom_factor)?,
            stroke_color: parse_var(&lookup, "PLOT_STROKE_COLOR", defaults.stroke_color)?,
            stroke_width: parse_var(&lookup, "PLOT_STROKE_WIDTH", defaults.stroke_width)?,
            bindings: defaults.bindings,
        })
    }
}

/// Surface size, initial limits, and background of a [`crate::screen::Screen`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Surface size in pixels (width, height).
    pub size: (u32, u32),
    /// Initial x limits (left, right).
    pub x_limits: Limits,
    /// Initial y limits (bottom, top).
    pub y_limits: Limits,
    pub background: ColorSpec,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_PIXEL_SIZE,
            x_limits: DEFAULT_LIMITS.into(),
            y_limits: DEFAULT_LIMITS.into(),
            background: ColorSpec::from("black"),
        }
    }
}

impl ScreenConfig {
    /// Defaults with `PLOT_BACKGROUND` applied if set.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidConfig`] if `PLOT_BACKGROUND` is unparsable.
    pub fn from_env() -> Result<Self, PlotError> {
        Self::from_lookup(env_var)
    }

    /// # Errors
    ///
    /// Returns [`PlotError::InvalidConfig`] if `PLOT_BACKGROUND` is unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PlotError> {
        let defaults = Self::default();
        Ok(Self {
            background: parse_var(&lookup, "PLOT_BACKGROUND", defaults.background.clone())?,
            ..defaults
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: T) -> Result<T, PlotError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PlotError::InvalidConfig { var: var.to_owned(), value: raw.clone() }),
    }
}
