//! Document decoding errors.

use thiserror::Error;

/// Errors that can occur while reading a host document.
///
/// Only structurally broken input errors; individual fields with the
/// wrong shape decode to defaults.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Malformed actor document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Actor document must be a JSON object")]
    NotAnObject,
}
