//! Scripted input replay.
//!
//! A script is a JSON document with an optional screen configuration and one
//! input snapshot per tick:
//!
//! ```json
//! { "screen": { "size": [200, 100] },
//!   "ticks": [ { "events": [{ "key_down": { "char": "d" } }] },
//!              { "events": [{ "button_down": "primary" }], "pointer": { "x": 10, "y": 10 },
//!                "held_buttons": ["primary"] } ] }
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::Path;

use plotter::config::{EngineConfig, ScreenConfig};
use plotter::input::InputSnapshot;
use plotter::render::RecordingBackend;
use plotter::screen::{FrameStatus, Screen};
use serde::Deserialize;

use crate::error::CliError;
use crate::record::FrameRecord;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub screen: Option<ScreenConfig>,
    #[serde(default)]
    pub ticks: Vec<InputSnapshot>,
}

impl ReplayScript {
    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadScript`] if the file cannot be read and
    /// [`CliError::InvalidJson`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| CliError::ReadScript { path: path.display().to_string(), source })?;
        Self::parse(&text)
    }

    /// # Errors
    ///
    /// Returns [`CliError::InvalidJson`] if `text` is not a valid script.
    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Feed each tick through a recording screen and hand every frame to `sink`.
///
/// `base` supplies the screen configuration when the script has none.
/// Replay stops after the first frame that reports quit. Returns the number
/// of frames produced.
///
/// # Errors
///
/// Returns the first error from the screen or from `sink`.
pub fn replay(
    script: &ReplayScript,
    base: ScreenConfig,
    engine: EngineConfig,
    mut sink: impl FnMut(FrameRecord) -> Result<(), CliError>,
) -> Result<u64, CliError> {
    let config = script.screen.clone().unwrap_or(base);
    let mut screen = Screen::new(config, engine, RecordingBackend::new())?;
    let mut frame = 0;
    for tick in &script.ticks {
        let status = screen.update(tick)?;
        sink(FrameRecord::new(frame, status, screen.backend_mut().take_frames()))?;
        frame += 1;
        if status == FrameStatus::Quit {
            tracing::info!(frame, "replay stopped on quit");
            break;
        }
    }
    tracing::info!(frames = frame, strokes = screen.engine().strokes().len(), "replay finished");
    Ok(frame)
}
