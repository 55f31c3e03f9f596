use thiserror::Error;

/// Errors surfaced while resolving connection parameters or loading the
/// server parameter document. All of them map to exit code 1 in the binary.
#[derive(Error, Debug)]
pub enum LinkGenError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("invalid fingerprint: {0} (expected chrome, firefox, safari, ios or android)")]
    InvalidFingerprint(String),

    #[error("parameter document error: {0}")]
    Document(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
