use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use hstore_spec::{Catalog, EditorSnapshot, hstore_schema, validate_rows};
use tracing::info;

use super::print_json;
use crate::config::load_rows;

#[derive(Args, Debug, Clone)]
pub struct RowsArgs {
    /// JSON file with the editor's rows (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub rows: PathBuf,
}

fn snapshot(args: &RowsArgs) -> Result<EditorSnapshot> {
    Ok(EditorSnapshot::new(load_rows(Some(args.rows.as_path()))?))
}

pub fn run_view(args: &RowsArgs, catalog: &Catalog) -> Result<()> {
    print_json(&snapshot(args)?.view(catalog))
}

pub fn run_schema(args: &RowsArgs, catalog: &Catalog) -> Result<()> {
    print_json(&hstore_schema(catalog, &snapshot(args)?))
}

pub fn run_check(args: &RowsArgs, catalog: &Catalog) -> Result<()> {
    let snapshot = snapshot(args)?;
    let report = validate_rows(catalog, snapshot.rows());
    print_json(&report)?;
    if !report.valid {
        let counts = report.counts();
        bail!(
            "hstore-check: {} missing field(s), {} invalid value(s)",
            counts.missing,
            counts.errors
        );
    }
    info!(rows = snapshot.len(), "rows are valid");
    Ok(())
}
