//! Workbook model
//!
//! The in-memory shape of a parsed spreadsheet document: sheets, tables,
//! headers and typed cell values. Parsing lives outside this crate.

pub mod cell;
pub mod workbook;

pub use cell::{CellType, CellValue};
pub use workbook::{Sheet, Table, Workbook, infer_column_types};
