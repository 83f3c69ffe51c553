//! CLI command implementations

pub mod columns;
pub mod inspect;
pub mod scaffold;
pub mod validate;

use std::path::Path;

use crate::cli::error::CliError;
use crate::model::{load_template, load_workbook};
use crate::models::Workbook;
use crate::validation::Template;

pub(crate) fn read_workbook(path: &Path) -> Result<Workbook, CliError> {
    load_workbook(path).map_err(|e| CliError::LoadError(path.to_path_buf(), e))
}

pub(crate) fn read_template(path: &Path) -> Result<Template, CliError> {
    load_template(path).map_err(|e| CliError::LoadError(path.to_path_buf(), e))
}
