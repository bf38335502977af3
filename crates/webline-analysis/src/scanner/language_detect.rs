//! Extension-based routing of files to a grammar.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Script grammar flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptDialect {
    /// ECMAScript modules with JSX.
    JavaScript,
    /// TypeScript without JSX (angle-bracket casts stay unambiguous).
    TypeScript,
    /// TypeScript with JSX.
    Tsx,
}

/// What a file is, as far as detection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Script(ScriptDialect),
    Stylesheet,
    Unsupported,
}

impl SourceKind {
    /// Classify from a file extension (without the leading dot).
    pub fn from_extension(ext: Option<&str>) -> Self {
        let Some(ext) = ext else {
            return Self::Unsupported;
        };
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Self::Script(ScriptDialect::JavaScript),
            "ts" | "mts" | "cts" => Self::Script(ScriptDialect::TypeScript),
            "tsx" => Self::Script(ScriptDialect::Tsx),
            "css" => Self::Stylesheet,
            _ => Self::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Script(ScriptDialect::JavaScript) => "javascript",
            Self::Script(ScriptDialect::TypeScript) => "typescript",
            Self::Script(ScriptDialect::Tsx) => "tsx",
            Self::Stylesheet => "css",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_extension() {
        assert_eq!(
            SourceKind::from_path(Path::new("src/app.mjs")),
            SourceKind::Script(ScriptDialect::JavaScript)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("src/App.TSX")),
            SourceKind::Script(ScriptDialect::Tsx)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("lib/util.cts")),
            SourceKind::Script(ScriptDialect::TypeScript)
        );
        assert_eq!(SourceKind::from_path(Path::new("a/b.css")), SourceKind::Stylesheet);
        assert_eq!(SourceKind::from_path(Path::new("README")), SourceKind::Unsupported);
        assert_eq!(SourceKind::from_path(Path::new("x.scss")), SourceKind::Unsupported);
    }
}
