//! Output formatting for CLI

use crate::models::Workbook;
use crate::validation::ValidationResult;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Format a validation result as readable text
pub fn format_validation_text(result: &ValidationResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", result.summary()));

    if !result.errors.is_empty() {
        output.push_str("\n⚠️  Errors:\n");
        for error in &result.errors {
            output.push_str(&format!("  - [{}] {}\n", error.kind(), error));
        }
    }

    if !result.sheets_validated.is_empty() {
        output.push_str(&format!(
            "\nSheets validated: {}\n",
            result.sheets_validated.join(", ")
        ));
    }
    if !result.tables_validated.is_empty() {
        output.push_str(&format!(
            "Tables validated: {}\n",
            result.tables_validated.join(", ")
        ));
    }

    if result.valid {
        output.push_str("\n✅ All checks passed!\n");
    }

    output
}

pub fn format_validation(
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_validation_text(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

/// List sheets, tables, headers and inferred column types
pub fn format_workbook_overview(workbook: &Workbook) -> String {
    let mut output = String::new();

    output.push_str(&format!("Workbook with {} sheet(s):\n", workbook.sheets.len()));
    for sheet in &workbook.sheets {
        output.push_str(&format!("  - {} ({} tables)\n", sheet.name, sheet.tables.len()));
        for table in &sheet.tables {
            let columns: Vec<String> = table
                .headers
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    let cell_type = table.column_types.get(idx).copied().unwrap_or_default();
                    format!("{}:{}", h, cell_type)
                })
                .collect();
            output.push_str(&format!(
                "      Table '{}' ({} rows): {}\n",
                table.name,
                table.row_count(),
                columns.join(", ")
            ));
        }
    }

    output
}
