//! Sheet schema: structural expectations for one sheet's table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::CellType;

/// How strictly sampled values must match a declared column type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeStrictness {
    /// Every non-empty sampled value must match
    #[default]
    Strict,
    /// At least the lenient threshold (50% by default) must match
    Lenient,
}

/// Expectations for the primary table of a sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetSchema {
    /// Table to validate; the sheet's first table when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub required_columns: Vec<String>,
    pub optional_columns: Vec<String>,
    pub column_types: BTreeMap<String, CellType>,
    pub type_strictness: TypeStrictness,
    /// Required columns must appear in the header in the given order
    pub expect_order: bool,
    /// Headers outside required and optional columns are errors
    pub strict_columns: bool,
    pub min_rows: usize,
    /// Inclusive upper bound, unbounded when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
    /// Zero data rows is acceptable regardless of `min_rows`
    pub allow_empty: bool,
}

impl SheetSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Whether `column` is declared as required or optional
    pub fn declares(&self, column: &str) -> bool {
        self.required_columns.iter().any(|c| c == column)
            || self.optional_columns.iter().any(|c| c == column)
    }

    /// Render the row bounds as `[min,max]`, `*` for an unbounded maximum
    pub fn row_bounds(&self) -> String {
        match self.max_rows {
            Some(max) => format!("[{},{}]", self.min_rows, max),
            None => format!("[{},*]", self.min_rows),
        }
    }

    /// True when both bounds are set and contradict each other
    pub fn has_contradictory_bounds(&self) -> bool {
        self.max_rows.is_some_and(|max| self.min_rows > max)
    }
}

/// Builder for SheetSchema
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: SheetSchema,
}

impl SchemaBuilder {
    /// Validate a named table instead of the sheet's first table
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.schema.table_name = Some(name.into());
        self
    }

    /// Add required columns, keeping call order
    pub fn require_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.schema.required_columns, names);
        self
    }

    pub fn optional_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.schema.optional_columns, names);
        self
    }

    /// Record the expected type of a column. The column does not need to be
    /// declared as required or optional.
    pub fn column_type(mut self, name: impl Into<String>, cell_type: CellType) -> Self {
        self.schema.column_types.insert(name.into(), cell_type);
        self
    }

    pub fn type_strictness(mut self, level: TypeStrictness) -> Self {
        self.schema.type_strictness = level;
        self
    }

    pub fn expect_order(mut self) -> Self {
        self.schema.expect_order = true;
        self
    }

    pub fn strict_columns(mut self) -> Self {
        self.schema.strict_columns = true;
        self
    }

    /// Set both row bounds; `None` leaves the maximum unbounded
    pub fn row_count(mut self, min: usize, max: Option<usize>) -> Self {
        self.schema.min_rows = min;
        self.schema.max_rows = max;
        self
    }

    pub fn min_rows(mut self, min: usize) -> Self {
        self.schema.min_rows = min;
        self
    }

    pub fn max_rows(mut self, max: usize) -> Self {
        self.schema.max_rows = Some(max);
        self
    }

    pub fn allow_empty(mut self) -> Self {
        self.schema.allow_empty = true;
        self
    }

    /// Build the schema. Contradictory row bounds (min > max) are swapped.
    pub fn build(self) -> SheetSchema {
        let mut schema = self.schema;
        if let Some(max) = schema.max_rows {
            if schema.min_rows > max {
                schema.max_rows = Some(schema.min_rows);
                schema.min_rows = max;
            }
        }
        schema
    }
}

fn push_unique<I, S>(target: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !target.contains(&name) {
            target.push(name);
        }
    }
}
