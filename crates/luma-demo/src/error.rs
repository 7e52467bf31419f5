use luma_core::ColorParseError;

/// Errors surfaced by the demo host.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown output mode {0:?} (expected text, json or bridge)")]
    InvalidOutput(String),
}
