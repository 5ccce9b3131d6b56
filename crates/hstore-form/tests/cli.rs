use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};

fn hstore_form() -> Command {
    let mut cmd = Command::cargo_bin("hstore-form").expect("binary");
    cmd.env_remove("HSTORE_CATALOG");
    cmd
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("json stdout")
}

#[test]
fn catalog_lists_built_in_keys() {
    hstore_form()
        .args(["catalog", "--keys"])
        .assert()
        .success()
        .stdout("Website\nAddress\nResidents\nOther Name\nTotal Pets\n");
}

#[test]
fn choices_append_current_key() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let rows = temp.child("rows.json");
    rows.write_str(r#"[{"key":"Website"},{"key":"Address"}]"#)
        .expect("write rows");

    hstore_form()
        .args(["choices", "--current", "Address", "--plain", "--rows"])
        .arg(rows.path())
        .assert()
        .success()
        .stdout("Residents\nOther Name\nTotal Pets\nAddress\n");
}

#[test]
fn choices_read_rows_from_stdin() {
    let assert = hstore_form()
        .args(["choices", "--rows", "-"])
        .write_stdin(r#"[{"key":"Residents","value":"3"}]"#)
        .assert()
        .success();
    let options = stdout_json(&assert.get_output().stdout);
    assert_eq!(
        options,
        json!([
            { "id": "Website", "label": "Website" },
            { "id": "Address", "label": "Address" },
            { "id": "Other Name", "label": "Other Name" },
            { "id": "Total Pets", "label": "Total Pets" }
        ])
    );
}

#[test]
fn validation_reports_rule_for_key() {
    let assert = hstore_form()
        .args(["validation", "Website"])
        .assert()
        .success();
    assert_eq!(
        stdout_json(&assert.get_output().stdout),
        json!({
            "validation": { "type": "string", "format": "url" },
            "description": "A favorite website for this location"
        })
    );
}

#[test]
fn check_fails_for_invalid_rows() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let rows = temp.child("rows.json");
    rows.write_str(r#"[{"key":"Residents","value":"lots"},{"key":"Address"}]"#)
        .expect("write rows");

    hstore_form()
        .args(["check", "--rows"])
        .arg(rows.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("type_mismatch"))
        .stderr(predicate::str::contains("1 missing field(s), 1 invalid value(s)"));
}

#[test]
fn check_passes_for_valid_rows() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let rows = temp.child("rows.json");
    rows.write_str(r#"[{"key":"Website","value":"https://example.org"}]"#)
        .expect("write rows");

    hstore_form()
        .args(["check", "--rows"])
        .arg(rows.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn toml_catalog_from_environment() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let catalog = temp.child("catalog.toml");
    catalog
        .write_str(
            r#"
[[attributes]]
keyname = "Phone"
description = "Contact number"
datatype = "string"
"#,
        )
        .expect("write catalog");

    hstore_form()
        .env("HSTORE_CATALOG", catalog.path())
        .args(["catalog", "--keys"])
        .assert()
        .success()
        .stdout("Phone\n");
}

#[test]
fn duplicate_catalog_keys_are_reported() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let catalog = temp.child("catalog.json");
    catalog
        .write_str(
            r#"{"attributes":[
                {"keyname":"Phone","datatype":"string"},
                {"keyname":"Phone","datatype":"integer"}
            ]}"#,
        )
        .expect("write catalog");

    hstore_form()
        .arg("--catalog")
        .arg(catalog.path())
        .args(["catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate keyname 'Phone'"));
}

#[test]
fn schema_lists_row_options() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let rows = temp.child("rows.json");
    rows.write_str(r#"[{"key":"Residents","value":"3"}]"#)
        .expect("write rows");

    let assert = hstore_form()
        .args(["schema", "--rows"])
        .arg(rows.path())
        .assert()
        .success();
    let schema = stdout_json(&assert.get_output().stdout);
    assert_eq!(
        schema["prefixItems"][0]["properties"]["value"]["type"],
        "number"
    );
}

#[test]
fn sample_location_passes() {
    hstore_form()
        .arg("location")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"));
}

#[test]
fn location_without_name_fails() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let value = temp.child("location.json");
    value
        .write_str(r#"{"location":"","details":[{"key":"","value":""}]}"#)
        .expect("write location");

    hstore_form()
        .args(["location", "--value"])
        .arg(value.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("/location"))
        .stdout(predicate::str::contains("/details/0/key"))
        .stderr(predicate::str::contains("3 missing field(s), 0 invalid value(s)"));
}

#[test]
fn location_schema_requires_name() {
    let assert = hstore_form()
        .args(["location", "--schema"])
        .assert()
        .success();
    let schema = stdout_json(&assert.get_output().stdout);
    assert_eq!(schema["required"], json!(["location"]));
    assert_eq!(schema["properties"]["details"]["type"], "array");
}
