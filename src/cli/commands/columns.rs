//! Columns command: report missing columns of a single table

use std::path::PathBuf;

use crate::cli::commands::read_workbook;
use crate::cli::error::CliError;
use crate::validation::validate_columns;

/// Arguments for the `columns` command
#[derive(Debug, clap::Args)]
pub struct ColumnsArgs {
    /// Workbook snapshot (JSON or YAML)
    #[arg(short, long)]
    pub workbook: PathBuf,
    /// Sheet to inspect (first sheet if omitted)
    #[arg(short, long)]
    pub sheet: Option<String>,
    /// Table within the sheet (first table if omitted)
    #[arg(long)]
    pub table: Option<String>,
    #[arg(required = true)]
    pub columns: Vec<String>,
}

/// Handle the `columns` command. Returns whether all columns are present.
pub fn handle_columns(args: &ColumnsArgs) -> Result<bool, CliError> {
    let workbook = read_workbook(&args.workbook)?;

    let sheet = match &args.sheet {
        Some(name) => workbook.sheet(name),
        None => workbook.first_sheet(),
    }
    .ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "Sheet not found: {}",
            args.sheet.as_deref().unwrap_or("(first sheet)")
        ))
    })?;

    let table = match &args.table {
        Some(name) => sheet.table(name),
        None => sheet.first_table(),
    }
    .ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "Table not found in sheet '{}': {}",
            sheet.name,
            args.table.as_deref().unwrap_or("(first table)")
        ))
    })?;

    let missing = validate_columns(table, &args.columns);
    if missing.is_empty() {
        println!("✅ All columns present in {}/{}", sheet.name, table.name);
        Ok(true)
    } else {
        println!("Missing columns in {}/{}:", sheet.name, table.name);
        for column in &missing {
            println!("  - {}", column);
        }
        Ok(false)
    }
}
