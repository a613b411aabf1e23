//! Integration tests for the expansion pipeline

use pretty_assertions::assert_eq;

use propsub::{expand, expand_strict, ExpandError, Expander, Properties, Syntax};

fn props(pairs: &[(&str, &str)]) -> Properties {
    pairs.iter().copied().collect()
}

#[test]
fn test_plain_text_passes_through() {
    let table = props(&[("a", "1")]);
    let text = "no placeholders anywhere, not even a dollar";
    assert_eq!(expand(text, &table).unwrap(), text);
}

#[test]
fn test_document_with_mixed_placeholders() {
    let table = props(&[
        ("app.name", "propsub"),
        ("db.host", "db.internal"),
        ("db.port", "5432"),
    ]);
    let document = "\
[service]
name = ${app.name}
database = ${db.host}:${db.port}
timeout = ${timeout:30}
";
    let expected = "\
[service]
name = propsub
database = db.internal:5432
timeout = 30
";
    assert_eq!(expand(document, &table).unwrap(), expected);
}

#[test]
fn test_nested_name_resolution() {
    let table = props(&[("which", "primary"), ("primary.host", "10.0.0.1")]);
    assert_eq!(expand("${${which}.host}", &table).unwrap(), "10.0.0.1");
}

#[test]
fn test_chained_value_resolution() {
    let table = props(&[
        ("url", "${scheme}://${host}/"),
        ("scheme", "https"),
        ("host", "example.org"),
    ]);
    assert_eq!(expand("${url}", &table).unwrap(), "https://example.org/");
}

#[test]
fn test_defaults_through_properties_files() {
    let table = Properties::from_toml_str(
        r#"
[db]
host = "localhost"
"#,
    )
    .expect("should parse");
    assert_eq!(
        expand("${db.host}:${db.port:5432}", &table).unwrap(),
        "localhost:5432"
    );
}

#[test]
fn test_merged_sources_later_wins() {
    let mut table = Properties::from_toml_str(r#"env = "dev""#).expect("should parse");
    let overlay = Properties::from_toml_str(r#"env = "prod""#).expect("should parse");
    table.merge(overlay);
    assert_eq!(expand("${env}", &table).unwrap(), "prod");
}

#[test]
fn test_cycle_through_property_values() {
    let table = props(&[("a", "${b}"), ("b", "${c}"), ("c", "${a}")]);
    let err = expand("${a}", &table).unwrap_err();
    assert!(matches!(err, ExpandError::CircularReference { .. }));
}

#[test]
fn test_strict_mode_aborts_whole_call() {
    let table = props(&[("a", "1")]);
    // The first placeholder would resolve, but the call must not return a
    // partially substituted string.
    let err = expand_strict("${a} then ${missing}", &table).unwrap_err();
    assert_eq!(err.placeholder(), "missing");
}

#[test]
fn test_lenient_mode_keeps_going_after_miss() {
    let table = props(&[("a", "1"), ("c", "3")]);
    assert_eq!(
        expand("${a} ${b} ${c}", &table).unwrap(),
        "1 ${b} 3"
    );
}

#[test]
fn test_unterminated_placeholder_survives_both_modes() {
    let table = props(&[]);
    assert_eq!(expand("tail ${oops", &table).unwrap(), "tail ${oops");
    assert_eq!(expand_strict("tail ${oops", &table).unwrap(), "tail ${oops");
}

#[test]
fn test_outer_brace_terminates_placeholder() {
    let table = props(&[("a{b}c", "outer")]);
    assert_eq!(expand("<${a{b}c}>", &table).unwrap(), "<outer>");
}

#[test]
fn test_custom_delimiters_end_to_end() {
    let expander = Expander::new(Syntax::new("%[", "]").with_value_separator("|"));
    let table = props(&[("greeting", "hello")]);
    assert_eq!(
        expander.expand("%[greeting] %[name|world]", &table).unwrap(),
        "hello world"
    );
}

#[test]
fn test_expansion_is_idempotent_when_fully_resolved() {
    let table = props(&[("a", "alpha"), ("b", "beta")]);
    let once = expand("${a}-${b}", &table).unwrap();
    assert_eq!(expand(&once, &table).unwrap(), once);
}

#[test]
fn test_closure_resolver_with_env_style_fallback() {
    let table = props(&[("configured", "from-table")]);
    let resolver = |name: &str| {
        table
            .get(name)
            .map(str::to_string)
            .or_else(|| (name == "fallback").then(|| "from-fallback".to_string()))
    };
    let expander = Expander::default();
    assert_eq!(
        expander
            .expand("${configured} + ${fallback}", &resolver)
            .unwrap(),
        "from-table + from-fallback"
    );
}
