//! Library error type

use thiserror::Error;

/// Errors raised by the storage layer and snapshot codec.
///
/// The controller never lets these escape a session: they are logged and the
/// stopwatch keeps running on its in-memory state.
#[derive(Debug, Error)]
pub enum StopwatchError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("snapshot is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, StopwatchError>;
