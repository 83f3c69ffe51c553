//! Template and workbook loading
//!
//! Templates are configuration files (YAML or JSON). Workbooks are JSON or
//! YAML snapshots of an already parsed document, in the shape of
//! [`Workbook`](crate::models::Workbook).

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::Workbook;
use crate::validation::{Template, TemplateError};

/// Errors that can occur while loading templates or workbooks
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid template: {0}")]
    Template(#[from] TemplateError),
}

/// Serialization format of a template or workbook file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn parse<T: DeserializeOwned>(content: &str, format: FileFormat) -> Result<T, LoadError> {
    match format {
        FileFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        FileFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a template and reject schemas the engine cannot evaluate
pub fn load_template_from_str(content: &str, format: FileFormat) -> Result<Template, LoadError> {
    let template: Template = parse(content, format)?;
    template.check()?;
    Ok(template)
}

pub fn load_template(path: impl AsRef<Path>) -> Result<Template, LoadError> {
    let path = path.as_ref();
    let template = load_template_from_str(&read(path)?, FileFormat::from_path(path)?)?;
    info!(
        "Loaded template '{}' ({} sheet schema(s)) from {}",
        template.name,
        template.sheet_schemas.len(),
        path.display()
    );
    Ok(template)
}

pub fn load_workbook_from_str(content: &str, format: FileFormat) -> Result<Workbook, LoadError> {
    parse(content, format)
}

pub fn load_workbook(path: impl AsRef<Path>) -> Result<Workbook, LoadError> {
    let path = path.as_ref();
    let workbook = load_workbook_from_str(&read(path)?, FileFormat::from_path(path)?)?;
    info!(
        "Loaded workbook with {} sheet(s) from {}",
        workbook.sheets.len(),
        path.display()
    );
    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellType;
    use crate::validation::TypeStrictness;

    const TEMPLATE_YAML: &str = r#"
name: Orders
requiredSheets: [Orders]
strictSheets: true
sheetSchemas:
  Orders:
    requiredColumns: [Id, Amount]
    columnTypes:
      Amount: number
    typeStrictness: lenient
    minRows: 1
    maxRows: 100
"#;

    #[test]
    fn test_load_template_yaml() {
        let template = load_template_from_str(TEMPLATE_YAML, FileFormat::Yaml).unwrap();
        assert_eq!(template.name, "Orders");
        assert!(template.strict_sheets);

        let schema = &template.sheet_schemas["Orders"];
        assert_eq!(schema.required_columns, vec!["Id", "Amount"]);
        assert_eq!(schema.type_strictness, TypeStrictness::Lenient);
        assert_eq!(schema.column_types["Amount"], CellType::Number);
        assert_eq!(schema.max_rows, Some(100));
        assert!(!schema.expect_order);
    }

    #[test]
    fn test_load_template_rejects_bad_bounds() {
        let yaml = "name: Bad\nsheetSchemas:\n  S:\n    minRows: 10\n    maxRows: 1\n";
        let err = load_template_from_str(yaml, FileFormat::Yaml).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Template(TemplateError::InvalidRowBounds { .. })
        ));
    }

    #[test]
    fn test_load_workbook_json() {
        let json = r#"{
            "sheets": [{
                "name": "Sheet1",
                "tables": [{
                    "name": "Table1",
                    "headers": ["Name", "Value"],
                    "rows": [[{"type": "string", "value": "a"}, {"type": "number", "value": 1}]],
                    "columnTypes": ["string", "number"]
                }]
            }]
        }"#;
        let workbook = load_workbook_from_str(json, FileFormat::Json).unwrap();
        let table = workbook.sheet("Sheet1").unwrap().first_table().unwrap();
        assert_eq!(table.headers, vec!["Name", "Value"]);
        assert_eq!(table.column_type("Value"), Some(CellType::Number));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.YML")).unwrap(), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a.json")).unwrap(), FileFormat::Json);
        assert!(matches!(
            FileFormat::from_path(Path::new("a.xlsx")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }
}
