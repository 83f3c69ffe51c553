//! Validation findings and engine errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CellType;

/// Kind of a structural validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    MissingSheet,
    UnexpectedSheet,
    MissingTable,
    MissingColumn,
    UnexpectedColumn,
    ColumnOrder,
    ColumnType,
    RowCount,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValidationErrorKind::MissingSheet => "missing_sheet",
            ValidationErrorKind::UnexpectedSheet => "unexpected_sheet",
            ValidationErrorKind::MissingTable => "missing_table",
            ValidationErrorKind::MissingColumn => "missing_column",
            ValidationErrorKind::UnexpectedColumn => "unexpected_column",
            ValidationErrorKind::ColumnOrder => "column_order",
            ValidationErrorKind::ColumnType => "column_type",
            ValidationErrorKind::RowCount => "row_count",
        };
        write!(f, "{}", name)
    }
}

/// A structural mismatch between a workbook and a template.
///
/// These are reported inside a [`ValidationResult`](super::ValidationResult),
/// never returned as `Err`.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("Required sheet '{sheet}' not found")]
    MissingSheet { sheet: String },

    #[error("Unexpected sheet '{sheet}'")]
    UnexpectedSheet { sheet: String },

    #[error("{}", missing_table_message(sheet, table.as_deref()))]
    MissingTable {
        sheet: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        table: Option<String>,
    },

    #[error("Required column '{column}' not found in {sheet}/{table}")]
    MissingColumn {
        sheet: String,
        table: String,
        column: String,
    },

    #[error("Unexpected column '{column}' in {sheet}/{table}")]
    UnexpectedColumn {
        sheet: String,
        table: String,
        column: String,
    },

    #[error(
        "Column order mismatch in {sheet}/{table} at position {position}: expected '{expected}', found '{found}'"
    )]
    ColumnOrder {
        sheet: String,
        table: String,
        position: usize,
        expected: String,
        found: String,
    },

    #[error(
        "Column '{column}' in {sheet}/{table} expected type {expected}, found {actual} ({matched}/{sampled} values match)"
    )]
    ColumnType {
        sheet: String,
        table: String,
        column: String,
        expected: CellType,
        actual: CellType,
        matched: usize,
        sampled: usize,
    },

    #[error("{sheet}/{table} has {actual} data row(s), expected {bounds}")]
    RowCount {
        sheet: String,
        table: String,
        bounds: String,
        actual: usize,
    },
}

fn missing_table_message(sheet: &str, table: Option<&str>) -> String {
    match table {
        Some(table) => format!("Table '{}' not found in sheet '{}'", table, sheet),
        None if sheet.is_empty() => "Workbook has no sheets".to_string(),
        None => format!("Sheet '{}' has no tables", sheet),
    }
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingSheet { .. } => ValidationErrorKind::MissingSheet,
            ValidationError::UnexpectedSheet { .. } => ValidationErrorKind::UnexpectedSheet,
            ValidationError::MissingTable { .. } => ValidationErrorKind::MissingTable,
            ValidationError::MissingColumn { .. } => ValidationErrorKind::MissingColumn,
            ValidationError::UnexpectedColumn { .. } => ValidationErrorKind::UnexpectedColumn,
            ValidationError::ColumnOrder { .. } => ValidationErrorKind::ColumnOrder,
            ValidationError::ColumnType { .. } => ValidationErrorKind::ColumnType,
            ValidationError::RowCount { .. } => ValidationErrorKind::RowCount,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn sheet(&self) -> &str {
        match self {
            ValidationError::MissingSheet { sheet }
            | ValidationError::UnexpectedSheet { sheet }
            | ValidationError::MissingTable { sheet, .. }
            | ValidationError::MissingColumn { sheet, .. }
            | ValidationError::UnexpectedColumn { sheet, .. }
            | ValidationError::ColumnOrder { sheet, .. }
            | ValidationError::ColumnType { sheet, .. }
            | ValidationError::RowCount { sheet, .. } => sheet,
        }
    }

    pub fn table(&self) -> Option<&str> {
        match self {
            ValidationError::MissingSheet { .. } | ValidationError::UnexpectedSheet { .. } => None,
            ValidationError::MissingTable { table, .. } => table.as_deref(),
            ValidationError::MissingColumn { table, .. }
            | ValidationError::UnexpectedColumn { table, .. }
            | ValidationError::ColumnOrder { table, .. }
            | ValidationError::ColumnType { table, .. }
            | ValidationError::RowCount { table, .. } => Some(table),
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            ValidationError::MissingColumn { column, .. }
            | ValidationError::UnexpectedColumn { column, .. }
            | ValidationError::ColumnType { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Expected value rendered for diagnostics
    pub fn expected(&self) -> Option<String> {
        match self {
            ValidationError::ColumnOrder { expected, .. } => Some(expected.clone()),
            ValidationError::ColumnType { expected, .. } => Some(expected.to_string()),
            ValidationError::RowCount { bounds, .. } => Some(bounds.clone()),
            _ => None,
        }
    }

    /// Observed value rendered for diagnostics
    pub fn actual(&self) -> Option<String> {
        match self {
            ValidationError::ColumnOrder { found, .. } => Some(found.clone()),
            ValidationError::ColumnType { actual, .. } => Some(actual.to_string()),
            ValidationError::RowCount { actual, .. } => Some(actual.to_string()),
            _ => None,
        }
    }
}

/// Malformed input to the engine itself. Validation is aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A schema carries `min_rows > max_rows`
    #[error("Schema for sheet '{sheet}' has contradictory row bounds: min {min} > max {max}")]
    InvalidRowBounds {
        sheet: String,
        min: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ValidationError::MissingSheet {
            sheet: "Sheet1".to_string(),
        };
        assert_eq!(err.message(), "Required sheet 'Sheet1' not found");
        assert_eq!(err.kind().to_string(), "missing_sheet");

        let err = ValidationError::MissingTable {
            sheet: "Data".to_string(),
            table: None,
        };
        assert_eq!(err.message(), "Sheet 'Data' has no tables");

        let err = ValidationError::MissingTable {
            sheet: "Data".to_string(),
            table: Some("Totals".to_string()),
        };
        assert_eq!(err.message(), "Table 'Totals' not found in sheet 'Data'");
        assert_eq!(err.table(), Some("Totals"));
    }

    #[test]
    fn test_diagnostic_fields() {
        let err = ValidationError::ColumnType {
            sheet: "S".to_string(),
            table: "T".to_string(),
            column: "Value".to_string(),
            expected: CellType::Number,
            actual: CellType::String,
            matched: 4,
            sampled: 10,
        };
        assert_eq!(err.column(), Some("Value"));
        assert_eq!(err.expected().as_deref(), Some("number"));
        assert_eq!(err.actual().as_deref(), Some("string"));

        let err = ValidationError::RowCount {
            sheet: "S".to_string(),
            table: "T".to_string(),
            bounds: "[1,100]".to_string(),
            actual: 0,
        };
        assert_eq!(err.expected().as_deref(), Some("[1,100]"));
        assert_eq!(err.actual().as_deref(), Some("0"));
        assert_eq!(err.column(), None);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ValidationError::UnexpectedSheet {
            sheet: "Extra".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "unexpectedSheet");
        assert_eq!(json["sheet"], "Extra");
    }
}
