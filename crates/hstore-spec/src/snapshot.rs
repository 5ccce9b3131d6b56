use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::choices::{ChoiceOption, available_choices};
use crate::rows::ChoiceRow;
use crate::rules::{FieldConstraints, build_validation};

/// Immutable state of one hstore editor.
///
/// Edits never mutate in place; each returns the next snapshot. Indices
/// past the end leave the rows untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EditorSnapshot {
    rows: Vec<ChoiceRow>,
}

impl EditorSnapshot {
    pub fn new(rows: Vec<ChoiceRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ChoiceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn with_row_added(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.push(ChoiceRow::default());
        Self { rows }
    }

    pub fn with_row_removed(&self, index: usize) -> Self {
        let mut rows = self.rows.clone();
        if index < rows.len() {
            rows.remove(index);
        }
        Self { rows }
    }

    pub fn with_key(&self, index: usize, key: impl Into<String>) -> Self {
        let key = key.into();
        self.with_row(index, |row| row.key = key)
    }

    pub fn with_value(&self, index: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        self.with_row(index, |row| row.value = value)
    }

    fn with_row(&self, index: usize, edit: impl FnOnce(&mut ChoiceRow)) -> Self {
        let mut rows = self.rows.clone();
        if let Some(row) = rows.get_mut(index) {
            edit(row);
        }
        Self { rows }
    }

    /// Chooser options and value constraints for every row.
    pub fn view(&self, catalog: &Catalog) -> EditorView {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| RowView {
                index,
                key: row.key.clone(),
                value: row.value.clone(),
                options: available_choices(&row.key, catalog, &self.rows),
                constraints: build_validation(&row.key, catalog),
            })
            .collect();
        EditorView { rows }
    }
}

impl From<Vec<ChoiceRow>> for EditorSnapshot {
    fn from(rows: Vec<ChoiceRow>) -> Self {
        Self::new(rows)
    }
}

/// Derived, per-row description handed to the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RowView {
    pub index: usize,
    pub key: String,
    pub value: String,
    pub options: Vec<ChoiceOption>,
    pub constraints: FieldConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EditorView {
    pub rows: Vec<RowView>,
}
