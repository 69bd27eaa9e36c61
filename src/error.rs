//! Top-level error type for loading and saving seating arrangements

use thiserror::Error;

use crate::layout::{ConfigError, LayoutError};

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed arguments to the layout engine
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Unreadable or invalid engine configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A position map that is not a JSON object of `{x, y}` records
    #[error("invalid position map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
