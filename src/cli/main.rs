//! # workbook-template CLI entry point
//!
//! Validates workbook snapshots against templates from the command line.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use workbook_template::cli::commands::columns::{ColumnsArgs, handle_columns};
use workbook_template::cli::commands::inspect::{InspectArgs, handle_inspect};
use workbook_template::cli::commands::scaffold::{ScaffoldArgs, handle_scaffold};
use workbook_template::cli::commands::validate::{
    QuickArgs, ValidateArgs, handle_quick, handle_validate,
};

/// Structural validation for parsed spreadsheet workbooks.
#[derive(Parser, Debug)]
#[command(name = "workbook-template", version, about)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a workbook against a template.
    Validate(ValidateArgs),
    /// Check that the first table of the first sheet has the given columns.
    Quick(QuickArgs),
    /// List the columns missing from one table.
    Columns(ColumnsArgs),
    /// Show sheets, tables, headers and inferred column types.
    Inspect(InspectArgs),
    /// Derive a template from an example workbook.
    Scaffold(ScaffoldArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ok = match &cli.command {
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Quick(args) => handle_quick(args)?,
        Commands::Columns(args) => handle_columns(args)?,
        Commands::Inspect(args) => {
            handle_inspect(args)?;
            true
        }
        Commands::Scaffold(args) => {
            handle_scaffold(args)?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
