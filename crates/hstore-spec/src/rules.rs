use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::catalog::{Catalog, Datatype};

/// JSON-schema primitive a value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    String,
    Number,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::String => "string",
            RuleType::Number => "number",
        }
    }
}

/// Extra string format layered on top of the rule type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleFormat {
    Url,
}

impl RuleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleFormat::Url => "url",
        }
    }
}

/// Validation applied to a row's value, derived from its key's datatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub kind: RuleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<RuleFormat>,
}

impl From<Datatype> for ValidationRule {
    fn from(datatype: Datatype) -> Self {
        match datatype {
            Datatype::String => Self {
                kind: RuleType::String,
                format: None,
            },
            Datatype::Integer => Self {
                kind: RuleType::Number,
                format: None,
            },
            Datatype::Url => Self {
                kind: RuleType::String,
                format: Some(RuleFormat::Url),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("expected a number, got '{value}'")]
    NotANumber { value: String },
    #[error("expected a url, got '{value}'")]
    NotAUrl { value: String },
}

impl RuleViolation {
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::NotANumber { .. } => "type_mismatch",
            RuleViolation::NotAUrl { .. } => "format_mismatch",
        }
    }
}

impl ValidationRule {
    /// Checks a raw editor value against the rule.
    pub fn check(&self, value: &str) -> Result<(), RuleViolation> {
        let trimmed = value.trim();
        if self.kind == RuleType::Number
            && !trimmed
                .parse::<f64>()
                .is_ok_and(|number| number.is_finite())
        {
            return Err(RuleViolation::NotANumber {
                value: value.to_string(),
            });
        }
        if self.format == Some(RuleFormat::Url) && Url::parse(trimmed).is_err() {
            return Err(RuleViolation::NotAUrl {
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub fn json_schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), Value::String(self.kind.as_str().into()));
        if let Some(format) = self.format {
            schema.insert("format".into(), Value::String(format.as_str().into()));
        }
        Value::Object(schema)
    }
}

/// Constraints for the value field paired with a selected key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldConstraints {
    pub validation: Option<ValidationRule>,
    pub description: String,
}

impl FieldConstraints {
    /// Accepts any input and carries no help text.
    pub fn unconstrained() -> Self {
        Self {
            validation: None,
            description: String::new(),
        }
    }
}

/// Derives the value-field rule and help text for `selected_key`.
///
/// Keys missing from the catalog (including the empty key) yield no rule
/// and an empty description.
pub fn build_validation(selected_key: &str, catalog: &Catalog) -> FieldConstraints {
    match catalog.find(selected_key) {
        Some(definition) => FieldConstraints {
            validation: Some(ValidationRule::from(definition.datatype)),
            description: definition.description.clone(),
        },
        None => FieldConstraints::unconstrained(),
    }
}
