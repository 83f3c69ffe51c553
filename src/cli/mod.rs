//! CLI module for the workbook-template binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
