use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::Catalog;
use crate::rows::ChoiceRow;

/// Entry offered by a row's key chooser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
}

impl ChoiceOption {
    fn for_key(keyname: &str) -> Self {
        Self {
            id: keyname.to_string(),
            label: keyname.to_string(),
        }
    }
}

/// Keys still selectable for the row currently holding `current_key`.
///
/// Keys used by any row are dropped, in catalog order. The current key is
/// appended at the end when it is a catalog key that was dropped, so a row
/// can always show its own selection.
pub fn available_choices(
    current_key: &str,
    catalog: &Catalog,
    used_rows: &[ChoiceRow],
) -> Vec<ChoiceOption> {
    let used: BTreeSet<&str> = used_rows.iter().map(|row| row.key.as_str()).collect();

    let mut options: Vec<ChoiceOption> = catalog
        .iter()
        .filter(|definition| !used.contains(definition.keyname.as_str()))
        .map(|definition| ChoiceOption::for_key(&definition.keyname))
        .collect();

    if let Some(current) = catalog.find(current_key)
        && used.contains(current.keyname.as_str())
    {
        options.push(ChoiceOption::for_key(&current.keyname));
    }

    trace!(
        current_key,
        used = used.len(),
        offered = options.len(),
        "computed key choices"
    );
    options
}
