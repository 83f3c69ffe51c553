//! Workbook Template - structural validation for parsed spreadsheets
//!
//! Provides:
//! - The workbook model handed over by a spreadsheet parser (sheets, tables,
//!   headers, typed cells)
//! - Sheet schemas and workbook templates, built fluently or loaded from YAML/JSON
//! - A validation engine that reports every structural mismatch in one pass
//! - Template scaffolding from an example workbook
//!
//! ```
//! use workbook_template::{CellType, SheetSchema, Sheet, Table, Template, Workbook, validate_template};
//!
//! let table = Table::with_headers("Table1", &["Name", "Value"], vec![vec!["a".into(), 1.0.into()]]);
//! let workbook = Workbook::new(vec![Sheet::new("Sheet1", vec![table])]);
//!
//! let schema = SheetSchema::builder()
//!     .require_columns(["Name"])
//!     .optional_columns(["Value"])
//!     .column_type("Value", CellType::Number)
//!     .row_count(1, Some(100))
//!     .build();
//! let template = Template::builder("FullTemplate")
//!     .require_sheets(["Sheet1"])
//!     .sheet("Sheet1", schema)
//!     .build();
//!
//! let result = validate_template(&workbook, &template).unwrap();
//! assert_eq!(result.summary(), "template FullTemplate: valid");
//! ```

pub mod model;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

pub use model::{
    FileFormat, LoadError, SaveError, load_template, load_workbook, save_template,
    scaffold_template,
};

// Re-export models
pub use models::{CellType, CellValue, Sheet, Table, Workbook};

// Re-export validation types
pub use validation::{
    SchemaBuilder, SheetSchema, Template, TemplateBuilder, TemplateError, TemplateValidator,
    TypeStrictness, ValidationError, ValidationErrorKind, ValidationResult, ValidatorConfig,
    quick_validate, validate_columns, validate_columns_in, validate_template,
};
