use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hstore_spec::{Catalog, ChoiceRow};
use tracing::{debug, info};

pub const CATALOG_ENV: &str = "HSTORE_CATALOG";

/// Where the attribute catalog was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    BuiltIn,
}

impl CatalogSource {
    /// `--catalog` wins over the environment; otherwise the built-in catalog.
    pub fn resolve(flag: Option<&Path>) -> Self {
        if let Some(path) = flag {
            return Self::File(path.to_path_buf());
        }
        match env::var(CATALOG_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::File(PathBuf::from(value.trim())),
            _ => Self::BuiltIn,
        }
    }

    pub fn load(&self) -> Result<Catalog> {
        match self {
            Self::BuiltIn => {
                debug!("using built-in location catalog");
                Catalog::location_attributes().context("built-in catalog is invalid")
            }
            Self::File(path) => {
                info!(path = %path.display(), "loading catalog");
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read catalog {}", path.display()))?;
                let catalog = if is_toml(path) {
                    Catalog::from_toml_str(&raw)
                } else {
                    Catalog::from_json_str(&raw)
                };
                catalog.with_context(|| format!("failed to parse catalog {}", path.display()))
            }
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Reads a JSON array of `{ "key", "value" }` rows; `-` reads stdin.
pub fn load_rows(path: Option<&Path>) -> Result<Vec<ChoiceRow>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read rows from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read rows {}", path.display()))?
    };
    let rows: Vec<ChoiceRow> = serde_json::from_str(&raw)
        .with_context(|| format!("rows in {} must be a JSON array", path.display()))?;
    debug!(rows = rows.len(), "rows loaded");
    Ok(rows)
}
