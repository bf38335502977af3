//! Scan pipeline errors.

use super::error_code::{self, WeblineErrorCode};
use super::DetectionError;

/// Errors that abort a scan run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Failed to build scan thread pool: {message}")]
    ThreadPool { message: String },
}

impl WeblineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Detection(e) => e.error_code(),
            Self::ThreadPool { .. } => error_code::THREAD_POOL_ERROR,
        }
    }
}
