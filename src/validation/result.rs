//! Aggregated outcome of a validation pass

use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationErrorKind};

/// Result of validating a workbook against a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Name of the template that was applied
    pub template: String,
    /// True when no errors were found
    pub valid: bool,
    /// Errors in detection order
    pub errors: Vec<ValidationError>,
    /// Sheets that were located and checked
    pub sheets_validated: Vec<String>,
    /// Tables that were located and checked, as `sheet/table`
    pub tables_validated: Vec<String>,
}

impl ValidationResult {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            valid: true,
            errors: Vec::new(),
            sheets_validated: Vec::new(),
            tables_validated: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.valid = false;
    }

    pub(crate) fn record_sheet(&mut self, sheet: &str) {
        if !self.sheets_validated.iter().any(|s| s == sheet) {
            self.sheets_validated.push(sheet.to_string());
        }
    }

    pub(crate) fn record_table(&mut self, sheet: &str, table: &str) {
        let id = table_id(sheet, table);
        if !self.tables_validated.contains(&id) {
            self.tables_validated.push(id);
        }
    }

    /// One-line summary, e.g. `template Orders: 2 error(s)`
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            format!("template {}: valid", self.template)
        } else {
            format!("template {}: {} error(s)", self.template, self.errors.len())
        }
    }

    /// Errors of a single kind, in detection order
    pub fn errors_of(&self, kind: ValidationErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind() == kind)
    }

    pub fn has_error(&self, kind: ValidationErrorKind) -> bool {
        self.errors_of(kind).next().is_some()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Identifier used in `tables_validated`
pub fn table_id(sheet: &str, table: &str) -> String {
    format!("{}/{}", sheet, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let mut result = ValidationResult::new("Orders");
        assert_eq!(result.summary(), "template Orders: valid");
        assert!(result.valid);

        result.add_error(ValidationError::MissingSheet {
            sheet: "Orders".to_string(),
        });
        result.add_error(ValidationError::UnexpectedSheet {
            sheet: "Scratch".to_string(),
        });
        assert!(!result.valid);
        assert_eq!(result.to_string(), "template Orders: 2 error(s)");
        assert!(result.has_error(ValidationErrorKind::UnexpectedSheet));
        assert!(!result.has_error(ValidationErrorKind::RowCount));
        assert_eq!(result.errors_of(ValidationErrorKind::MissingSheet).count(), 1);
    }

    #[test]
    fn test_records_are_unique_and_ordered() {
        let mut result = ValidationResult::new("T");
        result.record_sheet("B");
        result.record_sheet("A");
        result.record_sheet("B");
        result.record_table("B", "Table1");
        result.record_table("B", "Table1");
        assert_eq!(result.sheets_validated, vec!["B", "A"]);
        assert_eq!(result.tables_validated, vec!["B/Table1"]);
    }
}
