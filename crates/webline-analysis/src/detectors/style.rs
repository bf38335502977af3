//! Style detector — pseudo-class and pseudo-element selectors matching catalog names.
//!
//! Unlike the script detector, a stylesheet that does not parse is an error for
//! that file; the caller decides whether to skip it or abort.
//!
//! tree-sitter-css lags behind the at-rule prelude syntax in use today (range
//! media queries, `@container`, `@scope`, `@import ... layer()`). Preludes carry
//! no selectors, so they are blanked out before parsing and only errors in
//! selectors or in the rule structure fail the file.

use std::borrow::Cow;
use std::sync::Arc;

use tree_sitter::Node;
use webline_core::errors::DetectionError;

use super::traits::{FeatureDetector, FeatureHits};
use crate::catalog::{case_fold, Feature, LookupTable};
use crate::engine::types::SourceFile;
use crate::parsers::{self, Grammar};
use crate::scanner::SourceKind;

const PSEUDO_SELECTOR_KINDS: &[&str] = &["pseudo_class_selector", "pseudo_element_selector"];

/// Name node kinds, used when no colon marker precedes the name.
const PSEUDO_NAME_KINDS: &[&str] = &["class_name", "tag_name", "identifier"];

#[derive(Debug, Clone, Copy, Default)]
pub struct StyleDetector;

impl StyleDetector {
    pub fn new() -> Self {
        Self
    }

    /// Distinct features used in the selectors of `source`.
    ///
    /// `file` only labels the error.
    pub fn detect_source(
        &self,
        file: &str,
        source: &str,
        table: &LookupTable,
    ) -> Result<Vec<Arc<Feature>>, DetectionError> {
        let masked = mask_at_rule_preludes(source);
        let source = masked.as_ref();
        let tree = parsers::parse(source, Grammar::Css)?.ok_or_else(|| {
            DetectionError::StyleParse {
                file: file.to_string(),
                line: 1,
                column: 1,
            }
        })?;

        let root = tree.root_node();
        if let Some(error) = first_structural_error(root) {
            let pos = error.start_position();
            return Err(DetectionError::StyleParse {
                file: file.to_string(),
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
            });
        }

        let mut hits = FeatureHits::new();
        parsers::for_each_node(root, |node| {
            if node.kind() != "rule_set" {
                return;
            }
            let Some(selectors) = selector_list(&node) else {
                return;
            };
            parsers::for_each_node(selectors, |component| {
                if !PSEUDO_SELECTOR_KINDS.contains(&component.kind()) {
                    return;
                }
                if let Some(name) = pseudo_name(&component, source) {
                    hits.probe(table, &case_fold(name.trim_start_matches(':')));
                }
            });
        });
        Ok(hits.into_vec())
    }
}

/// Keywords whose prelude is kept: keyframe block selectors (`50%`) only parse
/// inside a real keyframes statement.
fn keeps_prelude(keyword: &str) -> bool {
    keyword.to_ascii_lowercase().ends_with("keyframes")
}

/// Blank out at-rule preludes, turning `@media (width >= 600px) {` into
/// `@xxxxx                  {`. Byte offsets and line breaks are unchanged, so
/// error positions still point into the original text.
pub(crate) fn mask_at_rule_preludes(source: &str) -> Cow<'_, str> {
    let bytes = source.as_bytes();
    let mut masked: Option<Vec<u8>> = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'\\' => i += 2,
            b'@' => {
                let keyword_start = i + 1;
                let mut keyword_end = keyword_start;
                while keyword_end < bytes.len() && is_ident_byte(bytes[keyword_end]) {
                    keyword_end += 1;
                }
                if keyword_end == keyword_start {
                    i += 1;
                    continue;
                }
                let prelude_end = find_prelude_end(bytes, keyword_end);
                if !keeps_prelude(&source[keyword_start..keyword_end]) {
                    let buf = masked.get_or_insert_with(|| bytes.to_vec());
                    buf[keyword_start..keyword_end].fill(b'x');
                    for byte in &mut buf[keyword_end..prelude_end] {
                        if *byte != b'\n' && *byte != b'\r' {
                            *byte = b' ';
                        }
                    }
                }
                i = prelude_end;
            }
            _ => i += 1,
        }
    }
    match masked.map(String::from_utf8) {
        Some(Ok(text)) => Cow::Owned(text),
        _ => Cow::Borrowed(source),
    }
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Index just past the comment opened at `start`.
fn skip_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Index just past the string opened at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index of the `{`, `;` or `}` that ends the prelude starting at `start`.
fn find_prelude_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = skip_comment(bytes, i);
                continue;
            }
            b'"' | b'\'' => {
                i = skip_string(bytes, i);
                continue;
            }
            b'\\' => i += 1,
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b'{' | b';' | b'}' if depth == 0 => return i,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// First error that makes the stylesheet malformed: a missing token, or an
/// `ERROR` node outside declaration values and at-rule preludes.
fn first_structural_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut found = None;
    parsers::for_each_node(root, |node| {
        if found.is_some() {
            return;
        }
        if node.is_missing() || (node.is_error() && !is_tolerated_error(&node)) {
            found = Some(node);
        }
    });
    found
}

fn is_tolerated_error(error: &Node<'_>) -> bool {
    let mut current = error.parent();
    while let Some(node) = current {
        match node.kind() {
            "declaration" => return true,
            "block" | "selectors" | "rule_set" | "stylesheet" => return false,
            kind if kind == "at_rule" || kind.ends_with("_statement") => return true,
            _ => current = node.parent(),
        }
    }
    false
}

fn selector_list<'tree>(rule: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = rule.walk();
    let list = rule
        .children(&mut cursor)
        .find(|child| child.kind() == "selectors");
    list
}

/// The token after the `:`/`::` marker, e.g. `has` in `a:has(b)`.
fn pseudo_name<'a>(selector: &Node<'_>, source: &'a str) -> Option<&'a str> {
    let mut cursor = selector.walk();
    let mut after_marker = false;
    let mut fallback = None;
    for child in selector.children(&mut cursor) {
        let kind = child.kind();
        if after_marker {
            return Some(parsers::node_text(&child, source));
        }
        if kind == ":" || kind == "::" {
            after_marker = true;
        } else if fallback.is_none() && PSEUDO_NAME_KINDS.contains(&kind) {
            fallback = Some(parsers::node_text(&child, source));
        }
    }
    fallback
}

impl FeatureDetector for StyleDetector {
    fn id(&self) -> &'static str {
        "style"
    }

    fn handles(&self, kind: SourceKind) -> bool {
        kind == SourceKind::Stylesheet
    }

    fn detect(
        &self,
        file: &SourceFile,
        _kind: SourceKind,
        table: &LookupTable,
    ) -> Result<Vec<Arc<Feature>>, DetectionError> {
        self.detect_source(&file.path, &file.text, table)
    }
}
