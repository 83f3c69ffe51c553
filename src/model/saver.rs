//! Template saving and scaffolding

use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::loader::{FileFormat, LoadError};
use crate::models::{CellType, CellValue, Table, Workbook};
use crate::validation::{SheetSchema, Template};

/// Errors that can occur while saving templates
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] LoadError),
}

pub fn template_to_string(template: &Template, format: FileFormat) -> Result<String, SaveError> {
    match format {
        FileFormat::Yaml => Ok(serde_yaml::to_string(template)?),
        FileFormat::Json => Ok(serde_json::to_string_pretty(template)?),
    }
}

/// Write a template, choosing the format from the file extension
pub fn save_template(template: &Template, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let content = template_to_string(template, FileFormat::from_path(path)?)?;
    std::fs::write(path, content).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Saved template '{}' to {}", template.name, path.display());
    Ok(())
}

/// Derive a template describing `workbook` as it is.
///
/// Every sheet becomes required, the headers of its first table become
/// required columns in header order (order enforced unless a header repeats),
/// and columns whose non-blank values all share one type get that type as
/// expected type. Sheets without tables are required but get no schema.
pub fn scaffold_template(name: impl Into<String>, workbook: &Workbook) -> Template {
    let mut builder = Template::builder(name);
    for sheet in &workbook.sheets {
        builder = builder.require_sheets([sheet.name.clone()]);
        let Some(table) = sheet.first_table() else {
            continue;
        };
        // First sheet wins for duplicate names, matching lookup semantics
        if workbook.sheet(&sheet.name).is_some_and(|s| !std::ptr::eq(s, sheet)) {
            continue;
        }

        let mut schema = SheetSchema::builder().require_columns(table.headers.iter().cloned());
        // A repeated header can never satisfy an order check
        let repeated = table
            .headers
            .iter()
            .enumerate()
            .any(|(idx, h)| table.column_index(h) != Some(idx));
        if !repeated {
            schema = schema.expect_order();
        }
        for (idx, header) in table.headers.iter().enumerate() {
            // Duplicate headers resolve to their first occurrence
            if table.column_index(header) != Some(idx) {
                continue;
            }
            if let Some(cell_type) = uniform_type(table, idx) {
                schema = schema.column_type(header.clone(), cell_type);
            }
        }
        builder = builder.sheet(sheet.name.clone(), schema.build());
    }
    builder.build()
}

/// The single type shared by every non-blank value of a column
fn uniform_type(table: &Table, index: usize) -> Option<CellType> {
    let mut types = table
        .column_values(index)
        .filter(|v| !v.is_blank())
        .map(CellValue::cell_type);
    let first = types.next()?;
    types.all(|t| t == first).then_some(first)
}
