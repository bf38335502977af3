//! Script detector — identifier and member-access references to catalog names.
//!
//! Matching is purely by name. There is no scope or binding resolution, so a
//! local `const navigation = ...` matches the `navigation` feature exactly like
//! the global does. Files that fail to parse yield no detections.

use std::sync::Arc;

use tree_sitter::Node;
use webline_core::errors::DetectionError;

use super::traits::{FeatureDetector, FeatureHits};
use crate::catalog::{case_fold, Feature, LookupTable};
use crate::engine::types::SourceFile;
use crate::parsers::{self, Grammar};
use crate::scanner::{ScriptDialect, SourceKind};

/// Node kinds that are a name reference in the ESTree sense of `Identifier`.
const NAME_REFERENCE_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "type_identifier",
];

/// Parents whose name children are markup tags/attributes, not script references.
const MARKUP_NAME_PARENTS: &[&str] = &[
    "jsx_opening_element",
    "jsx_closing_element",
    "jsx_self_closing_element",
    "jsx_attribute",
    "jsx_namespace_name",
];

/// Dotted-name nodes a JSX element name may be nested in.
const DOTTED_NAME_KINDS: &[&str] = &["member_expression", "nested_identifier"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    /// Distinct features referenced by `source`. Never fails.
    pub fn detect_source(
        &self,
        source: &str,
        dialect: ScriptDialect,
        table: &LookupTable,
    ) -> Vec<Arc<Feature>> {
        let grammar = Grammar::for_dialect(dialect);
        let tree = match parsers::parse(source, grammar) {
            Ok(Some(tree)) => tree,
            Ok(None) => {
                tracing::debug!(grammar = grammar.name(), "script parser returned no tree");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "script parser unavailable");
                return Vec::new();
            }
        };

        let root = tree.root_node();
        if let Some(error) = parsers::first_error(root) {
            let pos = error.start_position();
            tracing::debug!(
                grammar = grammar.name(),
                line = pos.row + 1,
                column = pos.column + 1,
                "script does not parse, skipping"
            );
            return Vec::new();
        }

        let mut hits = FeatureHits::new();
        parsers::for_each_node(root, |node| {
            let kind = node.kind();
            if NAME_REFERENCE_KINDS.contains(&kind) {
                if !is_markup_name(&node) {
                    hits.probe(table, &case_fold(parsers::node_text(&node, source)));
                }
            } else if kind == "member_expression" && !is_markup_name(&node) {
                if let Some(object) = node.child_by_field_name("object") {
                    if object.kind() == "identifier" {
                        hits.probe(table, &case_fold(parsers::node_text(&object, source)));
                    }
                }
            }
        });
        hits.into_vec()
    }
}

/// Whether `node` is (part of) a JSX element or attribute name, including each
/// segment of a dotted name like `<navigation.Item />`.
fn is_markup_name(node: &Node<'_>) -> bool {
    let mut current = *node;
    while let Some(parent) = current.parent() {
        let kind = parent.kind();
        if MARKUP_NAME_PARENTS.contains(&kind) {
            return true;
        }
        if !DOTTED_NAME_KINDS.contains(&kind) {
            return false;
        }
        current = parent;
    }
    false
}

impl FeatureDetector for ScriptDetector {
    fn id(&self) -> &'static str {
        "script"
    }

    fn handles(&self, kind: SourceKind) -> bool {
        matches!(kind, SourceKind::Script(_))
    }

    fn detect(
        &self,
        file: &SourceFile,
        kind: SourceKind,
        table: &LookupTable,
    ) -> Result<Vec<Arc<Feature>>, DetectionError> {
        let dialect = match kind {
            SourceKind::Script(dialect) => dialect,
            _ => ScriptDialect::Tsx,
        };
        Ok(self.detect_source(&file.text, dialect, table))
    }
}
