//! Inspect command

use std::path::PathBuf;

use crate::cli::commands::read_workbook;
use crate::cli::error::CliError;
use crate::cli::output::format_workbook_overview;

/// Arguments for the `inspect` command
#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    /// Workbook snapshot (JSON or YAML)
    #[arg(short, long)]
    pub workbook: PathBuf,
}

pub fn handle_inspect(args: &InspectArgs) -> Result<(), CliError> {
    let workbook = read_workbook(&args.workbook)?;
    print!("{}", format_workbook_overview(&workbook));
    Ok(())
}
