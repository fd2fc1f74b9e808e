#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("plot error: {0}")]
    Plot(#[from] plotter::PlotError),
    #[error("unknown preset {0}; expected 1 through 13")]
    UnknownPreset(u32),
    #[error("failed to read {path}: {source}")]
    ReadScript { path: String, source: std::io::Error },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
