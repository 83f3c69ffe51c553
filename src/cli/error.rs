//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{LoadError, SaveError};
use crate::validation::TemplateError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to load {path}: {1}", path = .0.display())]
    LoadError(PathBuf, #[source] LoadError),

    #[error("Failed to save {path}: {1}", path = .0.display())]
    SaveError(PathBuf, #[source] SaveError),

    #[error("Template cannot be evaluated: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to render output: {0}")]
    OutputError(#[from] serde_json::Error),
}
