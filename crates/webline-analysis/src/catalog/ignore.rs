//! Ignore list — feature names or ids excluded from the lookup table.

use std::path::Path;

use webline_core::FxHashSet;

use super::types::case_fold;

/// Case-folded tokens. A feature whose name or id is present never reaches detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    tokens: FxHashSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an ignore file: one token per line, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Load an ignore file. A missing or unreadable file is an empty set.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(e) => {
                if path.exists() {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "ignore file unreadable, ignoring nothing"
                    );
                } else {
                    tracing::debug!(path = %path.display(), "no ignore file");
                }
                Self::default()
            }
        }
    }

    pub fn insert(&mut self, token: &str) {
        self.tokens.insert(case_fold(token.trim()));
    }

    /// `token` is folded before the lookup.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&case_fold(token))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for token in iter {
            set.insert(token.as_ref());
        }
        set
    }
}
