//! Template and workbook loading and saving
//!
//! Reads templates and workbook snapshots from YAML/JSON files and writes
//! templates back, including templates scaffolded from an example workbook.

pub mod loader;
pub mod saver;

pub use loader::{
    FileFormat, LoadError, load_template, load_template_from_str, load_workbook,
    load_workbook_from_str,
};
pub use saver::{SaveError, save_template, scaffold_template, template_to_string};
