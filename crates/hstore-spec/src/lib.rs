#![allow(missing_docs)]

pub mod catalog;
pub mod choices;
pub mod location;
pub mod rows;
pub mod rules;
pub mod schema;
pub mod session;
pub mod snapshot;
pub mod validate;

pub use catalog::{
    AttributeDefinition, Catalog, CatalogError, CatalogFile, Datatype, catalog_file_schema,
};
pub use choices::{ChoiceOption, available_choices};
pub use location::{LocationValue, location_schema, validate_location};
pub use rows::ChoiceRow;
pub use rules::{
    FieldConstraints, RuleFormat, RuleType, RuleViolation, ValidationRule, build_validation,
};
pub use schema::hstore_schema;
pub use session::{EditError, EditorObserver, EditorSession, NoopObserver};
pub use snapshot::{EditorSnapshot, EditorView, RowView};
pub use validate::{
    IssueCounts, ValidationError, ValidationReport, validate_rows, validate_rows_at,
};
