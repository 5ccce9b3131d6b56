use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::cmd::{
    self, catalog::CatalogArgs, choices::ChoicesArgs, location::LocationArgs, rows::RowsArgs,
    validation::ValidationArgs,
};
use crate::config::CatalogSource;
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "hstore-form",
    about = "Inspect attribute catalogs and check hstore editor rows",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Catalog file (.json or .toml); falls back to $HSTORE_CATALOG, then the built-in catalog
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved attribute catalog
    Catalog(CatalogArgs),
    /// Print the JSON schema of catalog files
    CatalogSchema,
    /// List the keys a row may still choose
    Choices(ChoicesArgs),
    /// Show the value rule and help text for a key
    Validation(ValidationArgs),
    /// Show chooser options and value constraints for every row
    View(RowsArgs),
    /// Emit the JSON schema for the current rows
    Schema(RowsArgs),
    /// Validate rows; exits non-zero when any row is incomplete or invalid
    Check(RowsArgs),
    /// Validate a location form value, or print its schema with --schema
    Location(LocationArgs),
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    let source = CatalogSource::resolve(cli.catalog.as_deref());
    match cli.command {
        Commands::Catalog(args) => cmd::catalog::run(&args, &source.load()?),
        Commands::CatalogSchema => cmd::catalog::run_schema(),
        Commands::Choices(args) => cmd::choices::run(&args, &source.load()?),
        Commands::Validation(args) => cmd::validation::run(&args, &source.load()?),
        Commands::View(args) => cmd::rows::run_view(&args, &source.load()?),
        Commands::Schema(args) => cmd::rows::run_schema(&args, &source.load()?),
        Commands::Check(args) => cmd::rows::run_check(&args, &source.load()?),
        Commands::Location(args) => cmd::location::run(&args, &source.load()?),
    }
}
