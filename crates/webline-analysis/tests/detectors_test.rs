//! Detector tests — script name matching, style selector extraction, routing.

use std::sync::Arc;

use webline_analysis::detectors::{create_default_registry, ScriptDetector, StyleDetector};
use webline_analysis::scanner::{ScriptDialect, SourceKind};
use webline_analysis::{Feature, IgnoreSet, LookupTable, SourceFile};
use webline_core::errors::DetectionError;
use webline_core::WeblineErrorCode;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn table(names: &[(&str, bool)]) -> LookupTable {
    let features: Vec<Feature> = names
        .iter()
        .map(|(name, baseline)| Feature::new(name.to_lowercase(), *name, *baseline, ""))
        .collect();
    LookupTable::merge(&features, &[], &IgnoreSet::new())
}

fn ids(found: &[Arc<Feature>]) -> Vec<String> {
    found.iter().map(|f| f.id.clone()).collect()
}

// ---- Script ----

#[test]
fn script_matching_ignores_case() {
    let table = table(&[("MyFeature", false)]);
    for source in ["MyFeature.run();", "myfeature();", "const x = MYFEATURE;"] {
        let found = ScriptDetector.detect_source(source, ScriptDialect::JavaScript, &table);
        assert_eq!(ids(&found), vec!["myfeature"], "source: {source}");
    }
}

#[test]
fn script_parse_failure_is_empty_not_error() {
    let table = table(&[("fetch", true)]);
    let file = SourceFile::new("broken.js", "function ( { fetch");
    let registry = create_default_registry();
    let found = registry
        .run(&file, SourceKind::Script(ScriptDialect::JavaScript), &table)
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn script_output_is_first_occurrence_order() {
    let table = table(&[("fetch", true), ("navigation", false), ("structuredClone", true)]);
    let found = ScriptDetector.detect_source(
        "navigation.navigate(url);\nconst r = fetch(url);\nnavigation.back();\nstructuredClone(r);",
        ScriptDialect::TypeScript,
        &table,
    );
    assert_eq!(ids(&found), vec!["navigation", "fetch", "structuredclone"]);
}

#[test]
fn local_binding_shadowing_still_matches() {
    let table = table(&[("scheduler", false)]);
    let found = ScriptDetector.detect_source(
        "function run(scheduler) { return scheduler.postTask(work); }",
        ScriptDialect::JavaScript,
        &table,
    );
    assert_eq!(ids(&found), vec!["scheduler"]);
}

#[test]
fn object_shorthand_is_a_reference() {
    let table = table(&[("fetch", true)]);
    let found =
        ScriptDetector.detect_source("const api = { fetch };", ScriptDialect::JavaScript, &table);
    assert_eq!(ids(&found), vec!["fetch"]);
}

#[test]
fn string_literals_are_not_references() {
    let table = table(&[("fetch", true)]);
    let found = ScriptDetector.detect_source("log('fetch');", ScriptDialect::JavaScript, &table);
    assert!(found.is_empty());
}

// ---- Style ----

#[test]
fn style_pseudo_class_extraction() {
    let table = table(&[("has", false)]);
    let found = StyleDetector.detect_source("x.css", "a:has(b) { color: red; }", &table).unwrap();
    assert_eq!(ids(&found), vec!["has"]);

    let found = StyleDetector.detect_source("x.css", "a:hover { color: red; }", &table).unwrap();
    assert!(found.is_empty());
}

#[test]
fn style_rules_inside_at_rules_are_scanned() {
    let table = table(&[("focus-visible", true)]);
    let css = "@media (min-width: 600px) {\n  button:focus-visible { outline: 2px solid; }\n}\n";
    let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
    assert_eq!(ids(&found), vec!["focus-visible"]);
}

#[test]
fn style_walks_functional_arguments() {
    let table = table(&[("is", true), ("has", false)]);
    let found = StyleDetector
        .detect_source("x.css", "main :is(section:has(img)) { margin: 0; }", &table)
        .unwrap();
    assert_eq!(ids(&found), vec!["is", "has"]);
}

#[test]
fn style_matching_ignores_case() {
    let table = table(&[("backdrop", true)]);
    let found = StyleDetector
        .detect_source("x.css", "dialog::BACKDROP { background: black; }", &table)
        .unwrap();
    assert_eq!(ids(&found), vec!["backdrop"]);
}

#[test]
fn style_parse_failure_carries_location() {
    let table = table(&[("has", false)]);
    let css = "a { color: red; }\nb { color: blue; }\n}}}\n";
    let err = StyleDetector.detect_source("styles/app.css", css, &table).unwrap_err();
    match &err {
        DetectionError::StyleParse { file, line, column } => {
            assert_eq!(file, "styles/app.css");
            assert_eq!(*line, 3);
            assert!(*column >= 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.error_code(), "STYLE_PARSE_ERROR");
    assert!(err.to_string().contains("styles/app.css"));
}

// ---- Style: modern at-rules ----

#[test]
fn range_media_query_is_valid() {
    let table = table(&[("hover", true)]);
    for css in [
        "@media (width >= 600px) { a:hover { color: red; } }",
        "@media (400px <= width <= 700px) { a:hover { color: red; } }",
    ] {
        let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
        assert_eq!(ids(&found), vec!["hover"], "css: {css}");
    }
}

#[test]
fn container_query_is_valid() {
    let table = table(&[("hover", true)]);
    let css = "@container card (inline-size > 30em) {\n  a:hover { color: red; }\n}\n";
    let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
    assert_eq!(ids(&found), vec!["hover"]);
}

#[test]
fn scope_rule_is_valid() {
    let table = table(&[("hover", true)]);
    let css = "@scope (.card) to (.content) { a:hover { color: red; } }";
    let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
    assert_eq!(ids(&found), vec!["hover"]);
}

#[test]
fn import_with_layer_is_valid() {
    let table = table(&[("hover", true)]);
    let css = "@import url('a.css') layer(base);\na:hover { color: red; }\n";
    let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
    assert_eq!(ids(&found), vec!["hover"]);
}

#[test]
fn keyframes_stay_valid() {
    let table = table(&[("hover", true)]);
    let css = "@keyframes pulse { from { opacity: 0; } 50% { opacity: 1; } }\n\
               a:hover { color: red; }";
    let found = StyleDetector.detect_source("x.css", css, &table).unwrap();
    assert_eq!(ids(&found), vec!["hover"]);
}

#[test]
fn unclosed_block_inside_at_rule_is_still_an_error() {
    let table = table(&[("hover", true)]);
    let css = "@media (width >= 600px) {\n  a:hover { color: red;\n";
    let err = StyleDetector.detect_source("x.css", css, &table).unwrap_err();
    assert!(matches!(err, DetectionError::StyleParse { .. }));
}

// ---- Routing ----

#[test]
fn source_kind_by_extension() {
    assert_eq!(SourceFile::new("a.MJS", "").kind(), SourceKind::Script(ScriptDialect::JavaScript));
    assert_eq!(SourceFile::new("a.cts", "").kind(), SourceKind::Script(ScriptDialect::TypeScript));
    assert_eq!(SourceFile::new("src/App.tsx", "").kind(), SourceKind::Script(ScriptDialect::Tsx));
    assert_eq!(SourceFile::new("a.css", "").kind(), SourceKind::Stylesheet);
    assert_eq!(SourceFile::new("README", "").kind(), SourceKind::Unsupported);
    assert_eq!(SourceFile::new("a.scss", "").kind(), SourceKind::Unsupported);
}

#[test]
fn registry_routes_stylesheets_to_style_detector_only() {
    let table = table(&[("has", false)]);
    let registry = create_default_registry();
    let file = SourceFile::new("a.css", "a:has(b) {}");
    let found = registry.run(&file, SourceKind::Stylesheet, &table).unwrap();
    assert_eq!(ids(&found), vec!["has"]);
}
