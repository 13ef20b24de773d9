use std::path::PathBuf;

/// Error kinds the batch driver needs to tell apart: configuration and
/// environment errors are fatal, decode errors are recoverable per file.
#[derive(Debug, thiserror::Error)]
pub enum WavetraceError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
