//! Template validation engine
//!
//! Walks a [`Workbook`] against a [`Template`] and collects every structural
//! problem into a single [`ValidationResult`]. Checks never short-circuit:
//! a sheet or table that cannot be resolved only skips the checks that depend
//! on it.
//!
//! The engine borrows the workbook immutably and keeps no state between
//! calls, so one workbook may be validated concurrently from several threads.

use tracing::{debug, info, warn};

use crate::models::workbook::majority_type;
use crate::models::{CellType, CellValue, Sheet, Table, Workbook};

use super::config::ValidatorConfig;
use super::error::{TemplateError, ValidationError};
use super::result::ValidationResult;
use super::schema::{SheetSchema, TypeStrictness};
use super::template::Template;

/// Template name used by [`quick_validate`]
pub const QUICK_TEMPLATE_NAME: &str = "QuickValidate";

/// Validates workbooks against templates
#[derive(Debug, Clone, Default)]
pub struct TemplateValidator {
    config: ValidatorConfig,
}

impl TemplateValidator {
    /// Create a validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `workbook` against `template`.
    ///
    /// Structural mismatches are reported inside the returned result. `Err` is
    /// returned only when the template itself cannot be evaluated. Under
    /// `strict_sheets`, a sheet name repeated in the workbook yields a single
    /// `UnexpectedSheet`.
    pub fn validate(
        &self,
        workbook: &Workbook,
        template: &Template,
    ) -> Result<ValidationResult, TemplateError> {
        template.check()?;
        Ok(self.run(workbook, template))
    }

    /// Check that the first table of the first sheet contains `columns`
    pub fn quick_validate<I, S>(&self, workbook: &Workbook, columns: I) -> ValidationResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(first) = workbook.first_sheet() else {
            let mut result = ValidationResult::new(QUICK_TEMPLATE_NAME);
            result.add_error(ValidationError::MissingTable {
                sheet: String::new(),
                table: None,
            });
            return result;
        };

        let schema = SheetSchema::builder().require_columns(columns).build();
        let template = Template::builder(QUICK_TEMPLATE_NAME)
            .sheet(first.name.clone(), schema)
            .build();
        // No row bounds, nothing for `Template::check` to reject
        self.run(workbook, &template)
    }

    fn run(&self, workbook: &Workbook, template: &Template) -> ValidationResult {
        debug!(
            template = %template.name,
            sheets = workbook.sheets.len(),
            "Validating workbook against template"
        );
        warn_duplicate_sheets(workbook);

        let mut result = ValidationResult::new(template.name.clone());
        let required = template.unique_required_sheets();

        for name in &required {
            match workbook.sheet(name) {
                Some(sheet) => {
                    result.record_sheet(&sheet.name);
                    if let Some(schema) = template.sheet_schemas.get(*name) {
                        self.check_sheet(sheet, schema, &mut result);
                    }
                }
                None => result.add_error(ValidationError::MissingSheet {
                    sheet: name.to_string(),
                }),
            }
        }

        if template.strict_sheets {
            let mut reported: Vec<&str> = Vec::new();
            for sheet in &workbook.sheets {
                if template.declares_sheet(&sheet.name) || reported.contains(&sheet.name.as_str()) {
                    continue;
                }
                reported.push(&sheet.name);
                result.add_error(ValidationError::UnexpectedSheet {
                    sheet: sheet.name.clone(),
                });
            }
        }

        for (name, schema) in &template.sheet_schemas {
            if required.contains(&name.as_str()) {
                continue;
            }
            match workbook.sheet(name) {
                Some(sheet) => {
                    result.record_sheet(&sheet.name);
                    self.check_sheet(sheet, schema, &mut result);
                }
                None => debug!(sheet = %name, "Optional sheet not present, skipping schema"),
            }
        }

        info!(
            template = %template.name,
            errors = result.errors.len(),
            sheets = result.sheets_validated.len(),
            tables = result.tables_validated.len(),
            "Template validation finished"
        );
        result
    }

    fn check_sheet(&self, sheet: &Sheet, schema: &SheetSchema, result: &mut ValidationResult) {
        let table = match &schema.table_name {
            Some(name) => sheet.table(name),
            None => sheet.first_table(),
        };

        let Some(table) = table else {
            result.add_error(ValidationError::MissingTable {
                sheet: sheet.name.clone(),
                table: schema.table_name.clone(),
            });
            return;
        };

        debug!(sheet = %sheet.name, table = %table.name, "Checking table against schema");
        result.record_table(&sheet.name, &table.name);
        self.check_table(&sheet.name, table, schema, result);
    }

    /// Run the column, order, type and row-count checks of `schema` on `table`.
    /// Under `strict_columns`, a repeated undeclared header yields a single
    /// `UnexpectedColumn`.
    pub fn check_table(
        &self,
        sheet: &str,
        table: &Table,
        schema: &SheetSchema,
        result: &mut ValidationResult,
    ) {
        let required = unique(&schema.required_columns);

        for column in &required {
            if !table.has_column(column) {
                result.add_error(ValidationError::MissingColumn {
                    sheet: sheet.to_string(),
                    table: table.name.clone(),
                    column: column.to_string(),
                });
            }
        }

        if schema.expect_order {
            check_column_order(sheet, table, &required, result);
        }

        if schema.strict_columns {
            let mut reported: Vec<&str> = Vec::new();
            for header in &table.headers {
                if schema.declares(header) || reported.contains(&header.as_str()) {
                    continue;
                }
                reported.push(header);
                result.add_error(ValidationError::UnexpectedColumn {
                    sheet: sheet.to_string(),
                    table: table.name.clone(),
                    column: header.clone(),
                });
            }
        }

        for (column, expected) in &schema.column_types {
            if let Some(index) = table.column_index(column) {
                self.check_column_type(sheet, table, index, *expected, schema.type_strictness, result);
            }
        }

        check_row_count(sheet, table, schema, result);
    }

    fn check_column_type(
        &self,
        sheet: &str,
        table: &Table,
        index: usize,
        expected: CellType,
        strictness: TypeStrictness,
        result: &mut ValidationResult,
    ) {
        let limit = match self.config.sample_size {
            0 => usize::MAX,
            n => n,
        };
        let sample: Vec<CellType> = table
            .column_values(index)
            .take(limit)
            .filter(|v| !self.is_empty(v))
            .map(CellValue::cell_type)
            .collect();

        // Nothing to judge in an all-empty column
        if sample.is_empty() {
            return;
        }

        let sampled = sample.len();
        let matched = sample.iter().filter(|t| **t == expected).count();
        let passes = match strictness {
            TypeStrictness::Strict => matched == sampled,
            TypeStrictness::Lenient => {
                matched as f64 / sampled as f64 >= self.config.effective_lenient_threshold()
            }
        };
        if passes {
            return;
        }

        let actual = majority_type(sample.into_iter().filter(|t| *t != expected))
            .unwrap_or(expected);
        result.add_error(ValidationError::ColumnType {
            sheet: sheet.to_string(),
            table: table.name.clone(),
            column: table.headers[index].clone(),
            expected,
            actual,
            matched,
            sampled,
        });
    }

    fn is_empty(&self, value: &CellValue) -> bool {
        if self.config.treat_blank_as_empty {
            value.is_blank()
        } else {
            value.cell_type() == CellType::Empty
        }
    }
}

/// Filter the header down to required columns and compare it element-wise
/// with the declared order. A missing or repeated required column is a
/// deviation; one error is reported at the first mismatching position.
fn check_column_order(sheet: &str, table: &Table, required: &[&str], result: &mut ValidationResult) {
    let found: Vec<&str> = table
        .headers
        .iter()
        .map(String::as_str)
        .filter(|h| required.contains(h))
        .collect();

    let position = required
        .iter()
        .zip(&found)
        .position(|(e, f)| e != f)
        .or_else(|| (required.len() != found.len()).then_some(required.len().min(found.len())));

    if let Some(position) = position {
        result.add_error(ValidationError::ColumnOrder {
            sheet: sheet.to_string(),
            table: table.name.clone(),
            position,
            expected: required.get(position).copied().unwrap_or_default().to_string(),
            found: found.get(position).copied().unwrap_or_default().to_string(),
        });
    }
}

fn check_row_count(sheet: &str, table: &Table, schema: &SheetSchema, result: &mut ValidationResult) {
    let rows = table.row_count();
    if rows == 0 && schema.allow_empty {
        return;
    }

    let too_few = rows < schema.min_rows;
    let too_many = schema.max_rows.is_some_and(|max| rows > max);
    if too_few || too_many {
        result.add_error(ValidationError::RowCount {
            sheet: sheet.to_string(),
            table: table.name.clone(),
            bounds: schema.row_bounds(),
            actual: rows,
        });
    }
}

fn unique(names: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::with_capacity(names.len());
    for name in names {
        if !out.contains(&name.as_str()) {
            out.push(name);
        }
    }
    out
}

fn warn_duplicate_sheets(workbook: &Workbook) {
    let names = workbook.sheet_names();
    for (idx, name) in names.iter().enumerate() {
        if names[..idx].contains(name) {
            warn!(sheet = %name, "Workbook contains duplicate sheet name, first match is used");
        }
    }
}

/// Validate `workbook` against `template` with the default configuration
pub fn validate_template(
    workbook: &Workbook,
    template: &Template,
) -> Result<ValidationResult, TemplateError> {
    TemplateValidator::new().validate(workbook, template)
}

/// Check that the first table of the first sheet contains all `columns`
pub fn quick_validate<I, S>(workbook: &Workbook, columns: I) -> ValidationResult
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TemplateValidator::new().quick_validate(workbook, columns)
}

/// Return the names from `columns` that are not headers of `table`, in input order
pub fn validate_columns<I, S>(table: &Table, columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .filter(|c| !table.has_column(c.as_ref()))
        .map(|c| c.as_ref().to_string())
        .collect()
}

/// [`validate_columns`] on the first table of the named sheet.
/// `None` when the sheet does not exist or has no tables.
pub fn validate_columns_in<I, S>(workbook: &Workbook, sheet: &str, columns: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let table = workbook.sheet(sheet)?.first_table()?;
    Some(validate_columns(table, columns))
}
