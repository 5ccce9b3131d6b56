use std::collections::BTreeSet;

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const LOCATION_ATTRIBUTES: &str = include_str!("../assets/location_attributes.json");

/// Expected shape of an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Datatype {
    String,
    Integer,
    Url,
}

/// A selectable key for the hstore editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeDefinition {
    pub keyname: String,
    #[serde(default)]
    pub description: String,
    pub datatype: Datatype,
}

impl AttributeDefinition {
    pub fn new(
        keyname: impl Into<String>,
        description: impl Into<String>,
        datatype: Datatype,
    ) -> Self {
        Self {
            keyname: keyname.into(),
            description: description.into(),
            datatype,
        }
    }
}

/// On-disk catalog document (`attributes = [...]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogFile {
    pub attributes: Vec<AttributeDefinition>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("attribute #{index} has an empty keyname")]
    EmptyKeyname { index: usize },
    #[error("duplicate keyname '{keyname}' in catalog")]
    DuplicateKeyname { keyname: String },
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog toml: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Ordered set of attribute definitions with unique keynames.
///
/// Built once and never mutated; every lookup and filter runs against the
/// same ordering the definitions were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    definitions: Vec<AttributeDefinition>,
}

impl Catalog {
    pub fn new(definitions: Vec<AttributeDefinition>) -> Result<Self, CatalogError> {
        ensure_unique_keynames(&definitions)?;
        debug!(attributes = definitions.len(), "catalog loaded");
        Ok(Self { definitions })
    }

    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::try_from(file)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::try_from(file)
    }

    /// Details attributes offered by the location form (Website, Address,
    /// Residents, Other Name, Total Pets).
    pub fn location_attributes() -> Result<Self, CatalogError> {
        Self::from_json_str(LOCATION_ATTRIBUTES)
    }

    /// First definition whose keyname equals `key`.
    pub fn find(&self, key: &str) -> Option<&AttributeDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.keyname == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeDefinition> {
        self.definitions.iter()
    }

    pub fn keynames(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .map(|definition| definition.keyname.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            attributes: self.definitions.clone(),
        }
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::new(file.attributes)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a AttributeDefinition;
    type IntoIter = std::slice::Iter<'a, AttributeDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn ensure_unique_keynames(definitions: &[AttributeDefinition]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for (index, definition) in definitions.iter().enumerate() {
        if definition.keyname.trim().is_empty() {
            return Err(CatalogError::EmptyKeyname { index });
        }
        if !seen.insert(definition.keyname.as_str()) {
            return Err(CatalogError::DuplicateKeyname {
                keyname: definition.keyname.clone(),
            });
        }
    }
    Ok(())
}

/// JSON schema describing the catalog file format.
pub fn catalog_file_schema() -> Value {
    serde_json::to_value(schema_for!(CatalogFile)).unwrap_or(Value::Null)
}
