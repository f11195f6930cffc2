//! Error types for the engine and the plan catalog

use thiserror::Error;

/// Errors raised by the compounding engine.
///
/// The engine performs no I/O, so the only failure is a rejected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading a plan catalog
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported plan catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid plan '{id}': {reason}")]
    Invalid { id: String, reason: String },
}
