//! Validate and quick commands

use std::path::PathBuf;

use crate::cli::commands::{read_template, read_workbook};
use crate::cli::error::CliError;
use crate::cli::output::{OutputFormat, format_validation};
use crate::validation::{TemplateValidator, ValidatorConfig};

/// Arguments for the `validate` command
#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Workbook snapshot (JSON or YAML)
    #[arg(short, long)]
    pub workbook: PathBuf,
    /// Template file (YAML or JSON)
    #[arg(short, long)]
    pub template: PathBuf,
    /// Rows sampled for column type checks (0 = all)
    #[arg(long, default_value_t = 0)]
    pub sample_size: usize,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `quick` command
#[derive(Debug, clap::Args)]
pub struct QuickArgs {
    /// Workbook snapshot (JSON or YAML)
    #[arg(short, long)]
    pub workbook: PathBuf,
    /// Columns the first table must contain
    #[arg(required = true)]
    pub columns: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Handle the `validate` command. Returns whether the workbook is valid.
pub fn handle_validate(args: &ValidateArgs) -> Result<bool, CliError> {
    let workbook = read_workbook(&args.workbook)?;
    let template = read_template(&args.template)?;

    let config = ValidatorConfig::builder()
        .sample_size(args.sample_size)
        .build();
    let result = TemplateValidator::with_config(config).validate(&workbook, &template)?;

    println!("{}", format_validation(&result, args.format)?);
    Ok(result.valid)
}

/// Handle the `quick` command. Returns whether the workbook is valid.
pub fn handle_quick(args: &QuickArgs) -> Result<bool, CliError> {
    let workbook = read_workbook(&args.workbook)?;
    let result = TemplateValidator::new().quick_validate(&workbook, args.columns.iter().cloned());

    println!("{}", format_validation(&result, args.format)?);
    Ok(result.valid)
}
