//! JSON-lines output: one record per rendered frame.

use std::io::Write;

use plotter::render::RenderCommand;
use plotter::screen::FrameStatus;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub quit: bool,
    pub commands: Vec<RenderCommand>,
}

impl FrameRecord {
    /// Flatten the frames a backend recorded during one update.
    pub fn new(frame: u64, status: FrameStatus, frames: Vec<Vec<RenderCommand>>) -> Self {
        Self {
            frame,
            quit: status == FrameStatus::Quit,
            commands: frames.into_iter().flatten().collect(),
        }
    }
}

/// Write `record` as a single JSON line.
///
/// # Errors
///
/// Returns [`CliError::InvalidJson`] or [`CliError::Io`] if writing fails.
pub fn write_record(out: &mut impl Write, record: &FrameRecord) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    Ok(())
}
