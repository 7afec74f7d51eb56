use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{DefinitionFile, MIXED_DEFINITIONS_JSON};

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_sphinx_filtration"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sphinx_filtration"));
}

#[test]
fn prints_resolved_calls_as_json() {
    let file = DefinitionFile::new("filters.json", MIXED_DEFINITIONS_JSON);
    let output = Command::new(env!("CARGO_BIN_EXE_sphinx_filtration"))
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["emitted"].as_array().unwrap().len(), 3);
    assert_eq!(json["emitted"][0]["call"], "range");
    assert_eq!(json["emitted"][0]["max"], 199);
    assert_eq!(json["skipped"][0], "title");
}

#[cfg(feature = "yaml")]
#[test]
fn prints_yaml_on_request() {
    let file = DefinitionFile::new("filters.json", MIXED_DEFINITIONS_JSON);
    Command::new(env!("CARGO_BIN_EXE_sphinx_filtration"))
        .arg(file.path())
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("call: range"))
        .stdout(predicate::str::contains("max: 199"))
        .stdout(predicate::str::contains("call: exact"))
        .stdout(predicate::str::contains("- title"));
}

#[test]
fn invalid_definition_fails() {
    let file = DefinitionFile::new("filters.json", r#"{ "filters": [ { "kind": "number", "name": "price", "value": "ten" } ] }"#);
    Command::new(env!("CARGO_BIN_EXE_sphinx_filtration"))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid definition for filter \"price\""));
}

#[test]
fn unsupported_extension_fails() {
    let file = DefinitionFile::new("filters.toml", "");
    Command::new(env!("CARGO_BIN_EXE_sphinx_filtration"))
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported definition format"));
}
