//! Per-file detection errors.

use super::error_code::{self, WeblineErrorCode};

/// Errors a detector can report for a single file.
///
/// Script parse failures never surface here; the script detector degrades to
/// zero detections instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    #[error("Stylesheet parse error in {file} at {line}:{column}")]
    StyleParse {
        file: String,
        line: u32,
        column: u32,
    },

    #[error("Parser unavailable for {grammar}: {message}")]
    ParserUnavailable { grammar: String, message: String },
}

impl WeblineErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StyleParse { .. } => error_code::STYLE_PARSE_ERROR,
            Self::ParserUnavailable { .. } => error_code::PARSER_UNAVAILABLE,
        }
    }
}
