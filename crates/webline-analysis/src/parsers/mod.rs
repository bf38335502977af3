//! tree-sitter grammar selection and parsing.

use tree_sitter::{Language, Node, Parser, Tree};
use webline_core::errors::DetectionError;

use crate::scanner::ScriptDialect;

/// Grammars the detectors parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    JavaScript,
    TypeScript,
    Tsx,
    Css,
}

impl Grammar {
    pub fn for_dialect(dialect: ScriptDialect) -> Self {
        match dialect {
            ScriptDialect::JavaScript => Self::JavaScript,
            ScriptDialect::TypeScript => Self::TypeScript,
            ScriptDialect::Tsx => Self::Tsx,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Css => tree_sitter_css::LANGUAGE.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Css => "css",
        }
    }
}

/// Parse `source` with a fresh parser. `Ok(None)` means the parser gave up.
///
/// Parsers are not `Sync`, so one is created per call; this keeps detectors
/// shareable across rayon workers.
pub fn parse(source: &str, grammar: Grammar) -> Result<Option<Tree>, DetectionError> {
    let mut parser = Parser::new();
    parser
        .set_language(&grammar.language())
        .map_err(|e| DetectionError::ParserUnavailable {
            grammar: grammar.name().to_string(),
            message: e.to_string(),
        })?;
    Ok(parser.parse(source, None))
}

/// First `ERROR` or missing node in document order, if any.
pub fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only descend into subtrees that contain the error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(root);
            }
        }
    }
}

/// UTF-8 text of a node, or `""` if the range is not on a char boundary.
pub fn node_text<'a>(node: &Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Pre-order walk over every node under (and including) `root`.
pub fn for_each_node<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.node() == root {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
