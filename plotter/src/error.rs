//! Error type shared by every fallible operation in the plotter crate.

/// Errors surfaced by the viewport, the color resolver, and configuration.
///
/// Committing an empty stroke is not an error: the store reports it as a
/// skipped commit and nothing is surfaced to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// Limits are degenerate, non-finite, or the pixel size is zero.
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    /// Unrecognized color string or wrong-length component tuple.
    #[error("{0} is not a valid color")]
    InvalidColor(String),

    /// Colormap name with no known lookup table.
    #[error("unknown colormap: {0}")]
    UnknownColormap(String),

    /// `plot` was handed x and y sequences of different lengths.
    #[error("x and y lengths differ: {xs} vs {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    /// A configuration variable could not be parsed.
    #[error("invalid config value for {var}: {value}")]
    InvalidConfig { var: String, value: String },
}
