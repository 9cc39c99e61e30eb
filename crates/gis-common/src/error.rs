//! Error types for the map-symbology crates.

use thiserror::Error;

/// Result type alias using SymbologyError.
pub type SymbologyResult<T> = Result<T, SymbologyError>;

/// Primary error type for symbology operations.
#[derive(Debug, Error)]
pub enum SymbologyError {
    // === Symbol Errors ===
    #[error("Unsupported symbol kind: {0}")]
    UnsupportedSymbol(String),

    #[error("Invalid symbol definition: {0}")]
    InvalidSymbol(String),

    // === Renderer Errors ===
    #[error("Invalid renderer definition: {0}")]
    InvalidRenderer(String),

    // === Legend Errors ===
    #[error("Legend has no layer section at index {0}")]
    MissingLegendLayer(usize),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Conversion from common error types
impl From<serde_json::Error> for SymbologyError {
    fn from(err: serde_json::Error) -> Self {
        SymbologyError::InternalError(format!("JSON error: {}", err))
    }
}
