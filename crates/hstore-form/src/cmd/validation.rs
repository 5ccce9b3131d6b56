use anyhow::Result;
use clap::Args;
use hstore_spec::{Catalog, build_validation};
use tracing::warn;

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct ValidationArgs {
    /// Selected key
    pub key: String,
}

pub fn run(args: &ValidationArgs, catalog: &Catalog) -> Result<()> {
    if !args.key.is_empty() && !catalog.contains(&args.key) {
        warn!(key = %args.key, "key is not in the catalog; value is unconstrained");
    }
    print_json(&build_validation(&args.key, catalog))
}
