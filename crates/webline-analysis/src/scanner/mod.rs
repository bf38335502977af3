//! Source routing. File discovery itself belongs to the host.

pub mod language_detect;

pub use language_detect::{ScriptDialect, SourceKind};
