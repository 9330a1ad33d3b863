//! Error types for settings I/O.
//!
//! The interaction core has no error paths; everything fallible lives at the
//! configuration edge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
