use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_yaml::Value;
use yamlwrap_engine::{
    Operation, SelectionPolicy, TransformConfig, TransformError, codec, transform,
};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn config(op: Operation, width: usize) -> TransformConfig {
    TransformConfig::new(op).with_width(NonZeroUsize::new(width).unwrap())
}

fn str_at<'a>(docs: &'a [Value], doc: usize, record: usize, key: &str) -> &'a str {
    docs[doc][record][key].as_str().unwrap()
}

#[rstest]
#[case(Operation::Unwrap)]
#[case(Operation::Wrap)]
#[case(Operation::Rewrap)]
fn every_operation_is_idempotent_on_documents(#[case] op: Operation) {
    let input = fixture("records.yaml");
    for width in [20, 70] {
        let once = transform(&input, &config(op, width)).unwrap();
        let twice = transform(&once, &config(op, width)).unwrap();
        assert_eq!(twice, once, "{op} at width {width}");
    }
}

#[test]
fn unwrap_then_rewrap_restores_wrapped_form() {
    let input = fixture("records.yaml");
    let rewrapped = transform(&input, &config(Operation::Rewrap, 70)).unwrap();
    let unwrapped = transform(&rewrapped, &config(Operation::Unwrap, 70)).unwrap();
    let again = transform(&unwrapped, &config(Operation::Wrap, 70)).unwrap();
    assert_eq!(again, rewrapped);
}

#[test]
fn unwrap_keeps_structure_and_opaque_blocks() {
    let input = fixture("records.yaml");
    let before = codec::load(&input).unwrap();
    let out = transform(&input, &config(Operation::Unwrap, 70)).unwrap();
    let after = codec::load(&out).unwrap();

    for i in 0..2 {
        let keys = |docs: &[Value]| -> Vec<Value> {
            docs[0][i].as_mapping().unwrap().keys().cloned().collect()
        };
        assert_eq!(keys(&after), keys(&before));
        assert_eq!(after[0][i]["year"], before[0][i]["year"]);
        assert_eq!(after[0][i]["draft"], before[0][i]["draft"]);
    }

    let body = str_at(&after, 0, 0, "body");
    assert!(body.starts_with("Prose kept in YAML is easier to review when every paragraph is wrapped to a short, predictable width,"));
    assert!(body.contains("\n\n- A list item that is long enough to need wrapping at any sensible width.\n- A short item.\n\n"));
    assert!(body.contains("```yaml\ncode:   [stays, exactly,    as it was]\n```"));
    assert!(body.ends_with("\n\n## A header that is far too long to fit but must never be wrapped anyway"));

    let quoted = str_at(&after, 0, 1, "body");
    assert!(quoted.starts_with("> A quoted line that is long enough to tempt a wrapper into breaking it.\n\n"));
    assert!(quoted.ends_with("See [the documentation](https://example.com/a/rather/long/path) and `a code span with spaces` for details."));
}

#[test]
fn wrap_respects_width_except_for_unbreakable_spans() {
    let input = fixture("records.yaml");
    let out = transform(&input, &config(Operation::Wrap, 30)).unwrap();
    let docs = codec::load(&out).unwrap();

    let body = str_at(&docs, 0, 0, "body");
    for line in body.lines() {
        let opaque = line.starts_with("##") || line.starts_with("code:");
        assert!(opaque || line.chars().count() <= 30, "too long: {line:?}");
    }

    let linked = str_at(&docs, 0, 1, "body");
    assert!(linked.contains("[the documentation](https://example.com/a/rather/long/path)"));
    assert!(linked.contains("`a code span with spaces`"));
    assert!(linked.starts_with("> A quoted line that is long\nenough to tempt a wrapper\ninto breaking it.\n\n"));
    for line in linked.lines() {
        let unbreakable = line.contains("](") || line.contains('`');
        assert!(unbreakable || line.chars().count() <= 30, "too long: {line:?}");
    }
}

#[test]
fn excluded_key_is_left_alone() {
    let input = fixture("records.yaml");
    let config = config(Operation::Unwrap, 70)
        .with_selection(SelectionPolicy::Exclude(vec!["notes".into()]));
    let docs = codec::load(&transform(&input, &config).unwrap()).unwrap();

    assert_eq!(
        str_at(&docs, 0, 0, "notes"),
        "Hand-placed\nbreaks here\nare left alone when notes are excluded."
    );
    assert!(!str_at(&docs, 0, 0, "body").contains("wrapped to a\nshort"));
}

#[test]
fn multi_document_input_stays_multi_document() {
    let out = transform(&fixture("multi.yaml"), &config(Operation::Unwrap, 70)).unwrap();
    let docs = codec::load(&out).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0]["body"].as_str(), Some("first document with a wrapped paragraph"));
    assert_eq!(docs[1]["body"].as_str(), Some("second document also wrapped"));
}

#[test]
fn selection_key_missing_everywhere_fails() {
    let config = config(Operation::Unwrap, 70)
        .with_selection(SelectionPolicy::Include(vec!["summary".into()]));
    let err = transform(&fixture("records.yaml"), &config).unwrap_err();
    assert!(matches!(err, TransformError::Selection(_)));
}
