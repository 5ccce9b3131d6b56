use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One key/value pair in the hstore editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChoiceRow {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl ChoiceRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Row with a selected key and no value yet.
    pub fn keyed(key: impl Into<String>) -> Self {
        Self::new(key, "")
    }

    pub fn has_key(&self) -> bool {
        !self.key.trim().is_empty()
    }

    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Neither key nor value has been entered.
    pub fn is_unset(&self) -> bool {
        !self.has_key() && !self.has_value()
    }
}
