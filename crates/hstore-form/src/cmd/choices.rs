use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hstore_spec::{Catalog, available_choices};

use super::print_json;
use crate::config::load_rows;

#[derive(Args, Debug, Clone)]
pub struct ChoicesArgs {
    /// Key currently selected in the row being edited
    #[arg(long, default_value = "")]
    pub current: String,
    /// JSON file with the editor's rows (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub rows: Option<PathBuf>,
    /// Print one option id per line instead of JSON
    #[arg(long)]
    pub plain: bool,
}

pub fn run(args: &ChoicesArgs, catalog: &Catalog) -> Result<()> {
    let rows = load_rows(args.rows.as_deref())?;
    let options = available_choices(&args.current, catalog, &rows);
    if args.plain {
        for option in &options {
            println!("{}", option.id);
        }
        return Ok(());
    }
    print_json(&options)
}
