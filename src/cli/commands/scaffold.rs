//! Scaffold command: derive a template from an example workbook

use std::path::PathBuf;

use crate::cli::commands::read_workbook;
use crate::cli::error::CliError;
use crate::model::{FileFormat, save_template, scaffold_template, template_to_string};

/// Arguments for the `scaffold` command
#[derive(Debug, clap::Args)]
pub struct ScaffoldArgs {
    /// Example workbook snapshot (JSON or YAML)
    #[arg(short, long)]
    pub workbook: PathBuf,
    /// Template name
    #[arg(short, long, default_value = "Scaffold")]
    pub name: String,
    /// Output file (YAML on stdout if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_scaffold(args: &ScaffoldArgs) -> Result<(), CliError> {
    let workbook = read_workbook(&args.workbook)?;
    let template = scaffold_template(args.name.clone(), &workbook);

    match &args.output {
        Some(path) => {
            save_template(&template, path).map_err(|e| CliError::SaveError(path.clone(), e))?;
            eprintln!("Template '{}' written to {}", template.name, path.display());
        }
        None => {
            let yaml = template_to_string(&template, FileFormat::Yaml)
                .map_err(|e| CliError::SaveError(PathBuf::from("-"), e))?;
            print!("{}", yaml);
        }
    }
    Ok(())
}
