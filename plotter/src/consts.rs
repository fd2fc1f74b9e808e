//! Shared numeric constants for the plotter crate.

// ── Viewport ────────────────────────────────────────────────────

/// Default surface size in pixels (width, height).
pub const DEFAULT_PIXEL_SIZE: (u32, u32) = (1920, 1080);

/// Default data-space limits on both axes.
pub const DEFAULT_LIMITS: (f64, f64) = (0.0, 1.0);

/// Fraction of the span removed (or added) per wheel notch.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.05;

// ── Drawing ─────────────────────────────────────────────────────

/// Line width in pixels for freehand strokes and `plot` curves.
pub const DEFAULT_LINE_WIDTH: u32 = 1;

// ── Timing ──────────────────────────────────────────────────────

/// Frame-rate cap used by demo loops.
pub const DEFAULT_FRAME_RATE: u32 = 30;
