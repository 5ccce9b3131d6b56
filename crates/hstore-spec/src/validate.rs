use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::rows::ChoiceRow;
use crate::rules::ValidationRule;

/// Problem found in a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub code: String,
}

/// Result returned from [`validate_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_required: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Folds `other` into this report.
    pub fn merge(mut self, other: ValidationReport) -> Self {
        self.missing_required.extend(other.missing_required);
        self.errors.extend(other.errors);
        self.valid = self.missing_required.is_empty() && self.errors.is_empty();
        self
    }

    pub fn counts(&self) -> IssueCounts {
        IssueCounts {
            missing: self.missing_required.len(),
            errors: self.errors.len(),
        }
    }
}

/// Sizes of the two issue lists, tracked by editor sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IssueCounts {
    pub missing: usize,
    pub errors: usize,
}

/// Validates every row against the catalog.
///
/// Key and value are both required, so a blank row reports two missing
/// fields. Keyed rows are checked for unknown or repeated keys and then
/// against the key's rule.
pub fn validate_rows(catalog: &Catalog, rows: &[ChoiceRow]) -> ValidationReport {
    validate_rows_at("", catalog, rows)
}

/// Same as [`validate_rows`] with every path nested under `prefix`.
pub fn validate_rows_at(prefix: &str, catalog: &Catalog, rows: &[ChoiceRow]) -> ValidationReport {
    let mut missing_required = Vec::new();
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();
    let field_path = |idx: usize, field: &str| format!("{}/{}/{}", prefix, idx, field);
    let row_error = |idx: usize, field: &str, message: String, code: &str| ValidationError {
        path: field_path(idx, field),
        message,
        code: code.into(),
    };

    for (idx, row) in rows.iter().enumerate() {
        if !row.has_key() {
            missing_required.push(field_path(idx, "key"));
            if !row.has_value() {
                missing_required.push(field_path(idx, "value"));
            }
            continue;
        }

        let Some(definition) = catalog.find(&row.key) else {
            errors.push(row_error(
                idx,
                "key",
                format!("unknown key '{}'", row.key),
                "unknown_key",
            ));
            continue;
        };

        if !seen.insert(row.key.as_str()) {
            errors.push(row_error(
                idx,
                "key",
                format!("key '{}' is already used", row.key),
                "duplicate_key",
            ));
            continue;
        }

        if !row.has_value() {
            missing_required.push(field_path(idx, "value"));
            continue;
        }

        if let Err(violation) = ValidationRule::from(definition.datatype).check(&row.value) {
            errors.push(row_error(
                idx,
                "value",
                violation.to_string(),
                violation.code(),
            ));
        }
    }

    ValidationReport {
        valid: missing_required.is_empty() && errors.is_empty(),
        missing_required,
        errors,
    }
}
