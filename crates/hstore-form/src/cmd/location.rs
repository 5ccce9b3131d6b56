use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use hstore_spec::{Catalog, LocationValue, location_schema, validate_location};
use tracing::info;

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct LocationArgs {
    /// JSON file with `{ "location", "details" }`; defaults to the sample office location
    #[arg(long, value_name = "FILE")]
    pub value: Option<PathBuf>,
    /// Print the form schema instead of validating
    #[arg(long)]
    pub schema: bool,
}

fn load_value(args: &LocationArgs) -> Result<LocationValue> {
    let Some(path) = &args.value else {
        return Ok(LocationValue::sample());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read location {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse location {}", path.display()))
}

pub fn run(args: &LocationArgs, catalog: &Catalog) -> Result<()> {
    let value = load_value(args)?;
    if args.schema {
        return print_json(&location_schema(catalog, &value));
    }

    let report = validate_location(catalog, &value);
    print_json(&report)?;
    if !report.valid {
        let counts = report.counts();
        bail!(
            "location-check: {} missing field(s), {} invalid value(s); submit disabled",
            counts.missing,
            counts.errors
        );
    }
    info!(location = %value.location, details = value.details.len(), "location can be submitted");
    Ok(())
}
