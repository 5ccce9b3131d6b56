use anyhow::Result;
use clap::Args;
use hstore_spec::{Catalog, catalog_file_schema};

use super::print_json;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Print one keyname per line instead of JSON
    #[arg(long)]
    pub keys: bool,
}

pub fn run(args: &CatalogArgs, catalog: &Catalog) -> Result<()> {
    if args.keys {
        for keyname in catalog.keynames() {
            println!("{keyname}");
        }
        return Ok(());
    }
    print_json(&catalog.to_file())
}

pub fn run_schema() -> Result<()> {
    print_json(&catalog_file_schema())
}
