use hstore_spec::{
    AttributeDefinition, Catalog, CatalogError, Datatype, catalog_file_schema,
};

#[test]
fn built_in_catalog_has_location_attributes_in_order() {
    let catalog = Catalog::location_attributes().expect("built-in catalog");
    let keys: Vec<&str> = catalog.keynames().collect();
    assert_eq!(
        keys,
        vec!["Website", "Address", "Residents", "Other Name", "Total Pets"]
    );
    assert_eq!(
        catalog.find("Address").map(|definition| definition.description.as_str()),
        Some("Street Address for this location")
    );
    assert_eq!(
        catalog.find("Residents").map(|definition| definition.description.as_str()),
        Some("The total number of residents")
    );
    assert_eq!(
        catalog.find("Total Pets").map(|definition| definition.datatype),
        Some(Datatype::Integer)
    );
    assert_eq!(
        catalog.find("Residents").map(|definition| definition.datatype),
        Some(Datatype::Integer)
    );
}

#[test]
fn duplicate_keynames_are_rejected() {
    let err = Catalog::new(vec![
        AttributeDefinition::new("Website", "first", Datatype::Url),
        AttributeDefinition::new("Website", "second", Datatype::String),
    ])
    .expect_err("duplicates rejected");
    assert!(matches!(
        err,
        CatalogError::DuplicateKeyname { ref keyname } if keyname == "Website"
    ));
}

#[test]
fn blank_keynames_are_rejected() {
    let err = Catalog::new(vec![
        AttributeDefinition::new("Website", "", Datatype::Url),
        AttributeDefinition::new("  ", "", Datatype::String),
    ])
    .expect_err("blank rejected");
    assert!(matches!(err, CatalogError::EmptyKeyname { index: 1 }));
}

#[test]
fn loads_toml_catalog() {
    let raw = r#"
[[attributes]]
keyname = "Phone"
description = "Contact number"
datatype = "string"

[[attributes]]
keyname = "Floors"
datatype = "integer"
"#;
    let catalog = Catalog::from_toml_str(raw).expect("toml catalog");
    assert_eq!(catalog.len(), 2);
    let floors = catalog.find("Floors").expect("floors");
    assert_eq!(floors.description, "");
    assert_eq!(floors.datatype, Datatype::Integer);
}

#[test]
fn unknown_datatype_fails_to_load() {
    let raw = r#"{ "attributes": [ { "keyname": "When", "datatype": "date" } ] }"#;
    let err = Catalog::from_json_str(raw).expect_err("unknown datatype");
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn catalog_serializes_as_definition_list() {
    let catalog = Catalog::location_attributes().expect("built-in catalog");
    let value = serde_json::to_value(&catalog).expect("serialize");
    assert_eq!(value[0]["keyname"], "Website");
    assert_eq!(value[0]["datatype"], "url");

    let reloaded = Catalog::try_from(catalog.to_file()).expect("reload");
    assert_eq!(reloaded, catalog);
}

#[test]
fn file_schema_describes_attributes() {
    let schema = catalog_file_schema();
    let rendered = schema.to_string();
    assert!(rendered.contains("attributes"));
    assert!(rendered.contains("keyname"));
}
