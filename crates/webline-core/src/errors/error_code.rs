//! Stable string codes for errors crossing the host boundary.

pub const STYLE_PARSE_ERROR: &str = "STYLE_PARSE_ERROR";
pub const PARSER_UNAVAILABLE: &str = "PARSER_UNAVAILABLE";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Implemented by every error enum so hosts can map failures without matching variants.
pub trait WeblineErrorCode {
    fn error_code(&self) -> &'static str;
}
