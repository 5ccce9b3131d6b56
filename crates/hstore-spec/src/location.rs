use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::rows::ChoiceRow;
use crate::schema::hstore_schema;
use crate::snapshot::EditorSnapshot;
use crate::validate::{ValidationReport, validate_rows_at};

const LOCATION_FIELD: &str = "location";
const DETAILS_FIELD: &str = "details";
const LOCATION_PLACEHOLDER: &str = "Enter Location Name";

/// Value edited by the location form: a name plus its details rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocationValue {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub details: Vec<ChoiceRow>,
}

impl LocationValue {
    pub fn new(location: impl Into<String>, details: Vec<ChoiceRow>) -> Self {
        Self {
            location: location.into(),
            details,
        }
    }

    /// The office location the form starts out with.
    pub fn sample() -> Self {
        Self::new(
            "Office",
            vec![
                ChoiceRow::new("Website", "https://home.com"),
                ChoiceRow::new("Address", "123 Anystreet"),
            ],
        )
    }

    pub fn details_snapshot(&self) -> EditorSnapshot {
        EditorSnapshot::new(self.details.clone())
    }

    pub fn with_details(&self, snapshot: &EditorSnapshot) -> Self {
        Self {
            location: self.location.clone(),
            details: snapshot.rows().to_vec(),
        }
    }
}

/// Validates the whole location form.
///
/// `location` is a required string; every details row is validated under
/// `/details`. The form is submittable when the report is valid.
pub fn validate_location(catalog: &Catalog, value: &LocationValue) -> ValidationReport {
    let mut outer = ValidationReport {
        valid: true,
        ..ValidationReport::default()
    };
    if value.location.trim().is_empty() {
        outer.missing_required.push(format!("/{}", LOCATION_FIELD));
        outer.valid = false;
    }
    let details = validate_rows_at(&format!("/{}", DETAILS_FIELD), catalog, &value.details);
    outer.merge(details)
}

/// JSON schema for the location form with the details rows nested inside.
pub fn location_schema(catalog: &Catalog, value: &LocationValue) -> Value {
    let mut location = Map::new();
    location.insert("title".into(), Value::String("Location".into()));
    location.insert("type".into(), Value::String("string".into()));
    location.insert(
        "description".into(),
        Value::String(LOCATION_PLACEHOLDER.into()),
    );

    let mut details = match hstore_schema(catalog, &value.details_snapshot()) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    details.insert("title".into(), Value::String("Details".into()));

    let mut properties = Map::new();
    properties.insert(LOCATION_FIELD.into(), Value::Object(location));
    properties.insert(DETAILS_FIELD.into(), Value::Object(details));

    let mut root = Map::new();
    root.insert("type".into(), Value::String("object".into()));
    root.insert("properties".into(), Value::Object(properties));
    root.insert(
        "required".into(),
        Value::Array(vec![Value::String(LOCATION_FIELD.into())]),
    );
    Value::Object(root)
}
