// tests/integration/definitions.rs
use sphinx_filtration::{ApplyFilters, AttributeValue, FieldName, FilterCall, RecordingSphinxClient, load_definitions};

#[path = "../common/mod.rs"]
mod common;
use common::{DefinitionFile, MIXED_DEFINITIONS_JSON, at};

#[test]
fn applies_a_json_document() {
    let file = DefinitionFile::new("filters.json", MIXED_DEFINITIONS_JSON);
    let filters = load_definitions(&file.path()).unwrap().build().unwrap();

    let mut client = RecordingSphinxClient::new();
    let outcome = ApplyFilters::new(&mut client).run(&filters).unwrap();

    assert_eq!(outcome.emitted, client.calls());
    assert_eq!(outcome.skipped, [FieldName::from("title")]);
    assert_eq!(
        outcome.emitted,
        [
            FilterCall::Range { field: "price".into(), min: 0, max: 199, exclude: false },
            FilterCall::Range {
                field: "published_at".into(),
                min: at(2015, 3, 1, 0, 0, 0).and_utc().timestamp(),
                max: at(2015, 3, 31, 23, 59, 59).and_utc().timestamp(),
                exclude: false,
            },
            FilterCall::Exact {
                field: "color".into(),
                values: vec![AttributeValue::Int(3), AttributeValue::Int(5)],
                exclude: true,
            },
        ]
    );
}

#[cfg(feature = "yaml")]
#[test]
fn applies_a_yaml_document() {
    let file = DefinitionFile::new("filters.yaml", common::MIXED_DEFINITIONS_YAML);
    let filters = load_definitions(&file.path()).unwrap().build().unwrap();

    let mut client = RecordingSphinxClient::new();
    ApplyFilters::new(&mut client).run(&filters).unwrap();

    assert!(matches!(
        client.calls(),
        [FilterCall::FloatRange { min, max, .. }] if *min == 0.0 && (max - 2.99).abs() < 1e-9
    ));
}

#[test]
fn missing_file_is_an_infrastructure_error() {
    let file = DefinitionFile::new("present.json", "{}");
    let err = load_definitions(&file.dir().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
