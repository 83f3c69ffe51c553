//! Validation functionality
//!
//! Provides validation logic for:
//! - Templates (required and unexpected sheets)
//! - Sheet schemas (columns, column order, column types, row counts)
//! - Ad-hoc column presence checks

pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod schema;
pub mod template;

pub use config::{ValidatorConfig, ValidatorConfigBuilder};
pub use engine::{
    QUICK_TEMPLATE_NAME, TemplateValidator, quick_validate, validate_columns, validate_columns_in,
    validate_template,
};
pub use error::{TemplateError, ValidationError, ValidationErrorKind};
pub use result::ValidationResult;
pub use schema::{SchemaBuilder, SheetSchema, TypeStrictness};
pub use template::{Template, TemplateBuilder};
