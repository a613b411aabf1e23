//! Tests for error messages and diagnostic report rendering

use propsub::{expand_strict, ExpandError, Properties};

#[test]
fn test_unresolved_message() {
    let err = expand_strict("${missing}", &Properties::new()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"could not resolve placeholder 'missing' in "${missing}""#
    );
}

#[test]
fn test_circular_message() {
    let table: Properties = [("a", "${a}")].into_iter().collect();
    let err = expand_strict("${a}", &table).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"circular placeholder reference: 'a'");
}

#[test]
fn test_unresolved_error_carries_rewritten_input() {
    let table: Properties = [("a", "1")].into_iter().collect();
    let err = expand_strict("${a} ${missing}", &table).unwrap_err();
    match err {
        ExpandError::Unresolved { name, input, span } => {
            assert_eq!(name, "missing");
            // Earlier substitutions are applied, so the span is exact.
            assert_eq!(input, "1 ${missing}");
            assert_eq!(&input[span], "${missing}");
        }
        other => panic!("expected Unresolved, got {:?}", other),
    }
}

#[test]
fn test_report_labels_the_offending_span() {
    let err = expand_strict("port = ${server.port}", &Properties::new()).unwrap_err();
    let report = err.report("server.conf");
    assert!(report.contains("server.port"));
    assert!(report.contains("server.conf"));
    assert!(report.contains("no property source supplies this placeholder"));
}

#[test]
fn test_circular_report_mentions_the_chain_entry() {
    let table: Properties = [("name", "${name}")].into_iter().collect();
    let err = expand_strict("${name}", &table).unwrap_err();
    let report = err.report("<stdin>");
    assert!(report.contains("circular placeholder reference"));
    assert!(report.contains("name"));
}
