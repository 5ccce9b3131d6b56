use serde_json::{Map, Value};

use crate::catalog::Catalog;
use crate::choices::ChoiceOption;
use crate::rules::FieldConstraints;
use crate::snapshot::{EditorSnapshot, RowView};

const KEY_TITLE: &str = "Key Name";
const VALUE_TITLE: &str = "Value";

/// Generates a JSON schema for the editor's rows.
///
/// Existing rows get a `prefixItems` entry each, carrying that row's key
/// options and value rule. Rows appended later fall back to `items`, which
/// allows any catalog key and places no rule on the value.
pub fn hstore_schema(catalog: &Catalog, snapshot: &EditorSnapshot) -> Value {
    let view = snapshot.view(catalog);
    let prefix_items: Vec<Value> = view.rows.iter().map(row_schema).collect();

    let all_keys: Vec<ChoiceOption> = catalog
        .keynames()
        .map(|keyname| ChoiceOption {
            id: keyname.to_string(),
            label: keyname.to_string(),
        })
        .collect();
    let generic_row = object_schema(
        key_schema(&all_keys),
        value_schema(&FieldConstraints::unconstrained()),
    );

    let mut root = Map::new();
    root.insert("type".into(), Value::String("array".into()));
    if !prefix_items.is_empty() {
        root.insert("prefixItems".into(), Value::Array(prefix_items));
    }
    root.insert("items".into(), generic_row);
    Value::Object(root)
}

fn row_schema(row: &RowView) -> Value {
    object_schema(key_schema(&row.options), value_schema(&row.constraints))
}

fn object_schema(key: Value, value: Value) -> Value {
    let mut properties = Map::new();
    properties.insert("key".into(), key);
    properties.insert("value".into(), value);

    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    schema.insert(
        "required".into(),
        Value::Array(vec![
            Value::String("key".into()),
            Value::String("value".into()),
        ]),
    );
    Value::Object(schema)
}

fn key_schema(options: &[ChoiceOption]) -> Value {
    let mut schema = Map::new();
    schema.insert("title".into(), Value::String(KEY_TITLE.into()));
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert(
        "enum".into(),
        Value::Array(
            options
                .iter()
                .map(|option| Value::String(option.id.clone()))
                .collect(),
        ),
    );
    Value::Object(schema)
}

fn value_schema(constraints: &FieldConstraints) -> Value {
    let mut schema = match constraints.validation {
        Some(rule) => match rule.json_schema() {
            Value::Object(map) => map,
            _ => Map::new(),
        },
        None => Map::new(),
    };
    schema.insert("title".into(), Value::String(VALUE_TITLE.into()));
    if !constraints.description.is_empty() {
        schema.insert(
            "description".into(),
            Value::String(constraints.description.clone()),
        );
    }
    Value::Object(schema)
}
