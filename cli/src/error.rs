//! CLI error taxonomy: file access, input-format, and solver failures.

use std::path::PathBuf;

use flownet_core::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input is empty: expected a vertex count")]
    MissingVertexCount,

    #[error("vertex count must be positive, found {found}")]
    NonPositiveVertexCount { found: i64 },

    #[error("vertex count {found} is too large for a dense capacity matrix")]
    OversizedVertexCount { found: usize },

    #[error("token {token:?} at position {position} is not an integer")]
    InvalidToken { token: String, position: usize },

    #[error("expected {expected} capacity entries for {vertices} vertices, found {actual}")]
    WrongEntryCount {
        vertices: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("failed to encode summary as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
