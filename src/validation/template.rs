//! Workbook templates: sheet-level expectations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::TemplateError;
use super::schema::SheetSchema;

/// Named collection of sheet requirements.
///
/// Can be built with [`Template::builder`] or constructed directly; both
/// paths validate identically for equal field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    /// Used in diagnostics only
    pub name: String,
    pub required_sheets: Vec<String>,
    /// Sheets that are neither required nor have a schema are errors
    pub strict_sheets: bool,
    pub sheet_schemas: BTreeMap<String, SheetSchema>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn builder(name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder {
            template: Template::new(name),
        }
    }

    /// Whether the template mentions `sheet` as required or through a schema
    pub fn declares_sheet(&self, sheet: &str) -> bool {
        self.required_sheets.iter().any(|s| s == sheet) || self.sheet_schemas.contains_key(sheet)
    }

    /// Required sheet names with duplicates removed, first occurrence kept
    pub fn unique_required_sheets(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.required_sheets.len());
        for name in &self.required_sheets {
            if !seen.contains(&name.as_str()) {
                seen.push(name.as_str());
            }
        }
        seen
    }

    /// Reject schemas the engine cannot evaluate.
    ///
    /// Builders normalize row bounds, so only directly constructed or
    /// deserialized templates can fail here.
    pub fn check(&self) -> Result<(), TemplateError> {
        for (sheet, schema) in &self.sheet_schemas {
            if let Some(max) = schema.max_rows.filter(|_| schema.has_contradictory_bounds()) {
                return Err(TemplateError::InvalidRowBounds {
                    sheet: sheet.clone(),
                    min: schema.min_rows,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Builder for Template
#[derive(Debug)]
pub struct TemplateBuilder {
    template: Template,
}

impl TemplateBuilder {
    /// Require sheets to exist, in call order
    pub fn require_sheets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.template
            .required_sheets
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Associate a schema with a sheet, replacing any earlier one
    pub fn sheet(mut self, name: impl Into<String>, schema: SheetSchema) -> Self {
        self.template.sheet_schemas.insert(name.into(), schema);
        self
    }

    pub fn strict_sheets(mut self) -> Self {
        self.template.strict_sheets = true;
        self
    }

    /// Build the template, removing duplicate required sheet names
    pub fn build(self) -> Template {
        let mut template = self.template;
        let unique: Vec<String> = template
            .unique_required_sheets()
            .into_iter()
            .map(str::to_string)
            .collect();
        template.required_sheets = unique;
        template
    }
}
