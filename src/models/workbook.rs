//! Workbook, sheet and table model
//!
//! This is the read-only shape handed over by the workbook parser. The
//! validation engine only ever borrows it.

use serde::{Deserialize, Serialize};

use super::cell::{CellType, CellValue};

/// A parsed workbook: an ordered list of sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Find a sheet by exact name. Sheet names are not required to be unique;
    /// the first match wins.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// A named sheet holding zero or more tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, tables: Vec<Table>) -> Self {
        Self {
            name: name.into(),
            tables,
        }
    }

    /// The default target when a schema does not name a table
    pub fn first_table(&self) -> Option<&Table> {
        self.tables.first()
    }

    /// Find a table by exact name, first match wins
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// A header row plus typed data rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TableSnapshot")]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Per-column inferred type, parallel to `headers`
    pub column_types: Vec<CellType>,
}

impl Table {
    /// Create a table and infer per-column types from the rows
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let column_types = infer_column_types(headers.len(), &rows);
        Self {
            name: name.into(),
            headers,
            rows,
            column_types,
        }
    }

    /// Convenience constructor from string headers
    pub fn with_headers<S: AsRef<str>>(
        name: impl Into<String>,
        headers: &[S],
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        let headers = headers.iter().map(|h| h.as_ref().to_string()).collect();
        Self::new(name, headers, rows)
    }

    /// Index of the first header equal to `name` (case-sensitive)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Number of data rows (the header row is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Inferred type of the named column, `None` when the column is absent
    pub fn column_type(&self, name: &str) -> Option<CellType> {
        let idx = self.column_index(name)?;
        Some(self.column_types.get(idx).copied().unwrap_or_default())
    }

    /// Values of one column; short rows yield `Empty`
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows.iter().map(move |row| row.get(index).unwrap_or(&EMPTY))
    }
}

/// Serialized table; column types are optional and re-inferred when they do
/// not line up with the headers
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableSnapshot {
    name: String,
    #[serde(default)]
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
    #[serde(default)]
    column_types: Vec<CellType>,
}

impl From<TableSnapshot> for Table {
    fn from(snapshot: TableSnapshot) -> Self {
        if snapshot.column_types.len() != snapshot.headers.len() {
            return Table::new(snapshot.name, snapshot.headers, snapshot.rows);
        }
        Table {
            name: snapshot.name,
            headers: snapshot.headers,
            rows: snapshot.rows,
            column_types: snapshot.column_types,
        }
    }
}

/// Majority type of the non-empty values in each column.
/// Ties go to the type seen first; a column with no values is `Empty`.
pub fn infer_column_types(column_count: usize, rows: &[Vec<CellValue>]) -> Vec<CellType> {
    (0..column_count)
        .map(|idx| {
            let values = rows
                .iter()
                .filter_map(|row| row.get(idx))
                .filter(|v| !v.is_blank())
                .map(CellValue::cell_type);
            majority_type(values).unwrap_or_default()
        })
        .collect()
}

/// Most frequent type in `types`, ties resolved by first occurrence
pub(crate) fn majority_type(types: impl Iterator<Item = CellType>) -> Option<CellType> {
    let mut counts: Vec<(CellType, usize)> = Vec::new();
    for t in types {
        match counts.iter_mut().find(|(seen, _)| *seen == t) {
            Some((_, count)) => *count += 1,
            None => counts.push((t, 1)),
        }
    }

    let mut best: Option<(CellType, usize)> = None;
    for (t, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((t, count));
        }
    }
    best.map(|(t, _)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::with_headers(
            "Table1",
            &["Name", "Value", "Notes"],
            vec![
                vec!["a".into(), 1.0.into(), CellValue::Empty],
                vec!["b".into(), "n/a".into()],
                vec!["c".into(), 3.0.into(), "  ".into()],
            ],
        )
    }

    #[test]
    fn test_column_type_inference() {
        let table = sample_table();
        assert_eq!(
            table.column_types,
            vec![CellType::String, CellType::Number, CellType::Empty]
        );
        assert_eq!(table.column_type("Value"), Some(CellType::Number));
        assert_eq!(table.column_type("Ghost"), None);
    }

    #[test]
    fn test_majority_tie_goes_to_first_seen() {
        let types = vec![CellType::String, CellType::Number, CellType::Number, CellType::String];
        assert_eq!(majority_type(types.into_iter()), Some(CellType::String));
        assert_eq!(majority_type(std::iter::empty()), None);
    }

    #[test]
    fn test_short_rows_read_as_empty() {
        let table = sample_table();
        let notes: Vec<_> = table.column_values(2).collect();
        assert_eq!(notes.len(), 3);
        assert_eq!(*notes[1], CellValue::Empty);
    }

    #[test]
    fn test_sheet_lookup_first_match_wins() {
        let first = Sheet::new("Data", vec![Table::with_headers("A", &["x"], vec![])]);
        let second = Sheet::new("Data", vec![]);
        let workbook = Workbook::new(vec![first, second]);

        let found = workbook.sheet("Data").unwrap();
        assert_eq!(found.tables.len(), 1);
        assert!(workbook.sheet("data").is_none());
        assert_eq!(workbook.sheet_names(), vec!["Data", "Data"]);
    }

    #[test]
    fn test_snapshot_without_column_types_is_inferred() {
        let json = r#"{"name": "T", "headers": ["Amount", "Label"],
            "rows": [[{"type": "number", "value": 1}, {"type": "empty"}]]}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.column_types, vec![CellType::Number, CellType::Empty]);
        assert_eq!(table.column_type("Amount"), Some(CellType::Number));
    }

    #[test]
    fn test_snapshot_column_types_kept_when_aligned() {
        let json = r#"{"name": "T", "headers": ["Code"], "rows": [], "columnTypes": ["string"]}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.column_types, vec![CellType::String]);

        let json = r#"{"name": "T", "headers": ["A", "B"],
            "rows": [[{"type": "boolean", "value": true}]], "columnTypes": ["string"]}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.column_types, vec![CellType::Boolean, CellType::Empty]);
    }
}
