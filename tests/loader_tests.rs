//! Template and workbook file loading tests

use std::fs;

use tempfile::TempDir;
use workbook_template::model::load_template_from_str;
use workbook_template::{
    CellType, CellValue, FileFormat, LoadError, TypeStrictness, ValidationErrorKind, load_template,
    load_workbook, save_template, scaffold_template, validate_template,
};

const TEMPLATE_YAML: &str = r#"
name: Invoices
requiredSheets:
  - Invoices
strictSheets: true
sheetSchemas:
  Invoices:
    requiredColumns: [Id, Amount]
    optionalColumns: [Note]
    columnTypes:
      Amount: number
    typeStrictness: lenient
    expectOrder: true
    minRows: 1
    maxRows: 100
"#;

const WORKBOOK_JSON: &str = r#"{
  "sheets": [
    {
      "name": "Invoices",
      "tables": [
        {
          "name": "Table1",
          "headers": ["Id", "Amount", "Note"],
          "rows": [
            [{"type": "string", "value": "INV-1"}, {"type": "number", "value": 12.5}, {"type": "empty"}],
            [{"type": "string", "value": "INV-2"}, {"type": "number", "value": 99}, {"type": "string", "value": "late"}]
          ]
        }
      ]
    },
    {"name": "Scratch"}
  ]
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod template_loading_tests {
    use super::*;

    #[test]
    fn test_load_yaml_template() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "invoices.yaml", TEMPLATE_YAML);

        let template = load_template(&path).unwrap();
        assert_eq!(template.name, "Invoices");
        assert!(template.strict_sheets);
        let schema = &template.sheet_schemas["Invoices"];
        assert_eq!(schema.required_columns, vec!["Id", "Amount"]);
        assert_eq!(schema.column_types["Amount"], CellType::Number);
        assert_eq!(schema.type_strictness, TypeStrictness::Lenient);
        assert_eq!((schema.min_rows, schema.max_rows), (1, Some(100)));
        assert!(!schema.allow_empty);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let template = load_template_from_str("name: Bare\n", FileFormat::Yaml).unwrap();
        assert!(template.required_sheets.is_empty());
        assert!(template.sheet_schemas.is_empty());
        assert!(!template.strict_sheets);
    }

    #[test]
    fn test_contradictory_bounds_rejected_at_load() {
        let yaml = "name: Broken\nsheetSchemas:\n  Data:\n    minRows: 10\n    maxRows: 2\n";
        let err = load_template_from_str(yaml, FileFormat::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Template(_)), "{:?}", err);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "template.toml", "name = 'x'");
        assert!(matches!(
            load_template(&path),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_template(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_malformed_json_template() {
        let err = load_template_from_str("{\"name\": ", FileFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}

mod workbook_loading_tests {
    use super::*;

    #[test]
    fn test_load_json_workbook() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "invoices.json", WORKBOOK_JSON);

        let workbook = load_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Invoices", "Scratch"]);
        let table = workbook.sheet("Invoices").unwrap().first_table().unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], CellValue::Number(12.5));
        assert_eq!(table.rows[0][2], CellValue::Empty);
        assert!(workbook.sheet("Scratch").unwrap().tables.is_empty());
    }

    #[test]
    fn test_loaded_workbook_infers_missing_column_types() {
        let dir = TempDir::new().unwrap();
        let workbook = load_workbook(write(&dir, "invoices.json", WORKBOOK_JSON)).unwrap();

        let table = workbook.sheet("Invoices").unwrap().first_table().unwrap();
        assert_eq!(table.column_type("Id"), Some(CellType::String));
        assert_eq!(table.column_type("Amount"), Some(CellType::Number));
        assert_eq!(table.column_type("Note"), Some(CellType::String));
    }

    #[test]
    fn test_loaded_files_validate_end_to_end() {
        let dir = TempDir::new().unwrap();
        let template = load_template(write(&dir, "t.yml", TEMPLATE_YAML)).unwrap();
        let workbook = load_workbook(write(&dir, "w.json", WORKBOOK_JSON)).unwrap();

        let result = validate_template(&workbook, &template).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind(), ValidationErrorKind::UnexpectedSheet);
        assert_eq!(result.errors[0].sheet(), "Scratch");
        assert_eq!(result.tables_validated, vec!["Invoices/Table1"]);
    }
}

mod scaffold_tests {
    use super::*;

    #[test]
    fn test_saved_scaffold_reloads_and_validates() {
        let dir = TempDir::new().unwrap();
        let workbook = load_workbook(write(&dir, "w.json", WORKBOOK_JSON)).unwrap();
        let template = scaffold_template("Scaffold", &workbook);

        for file in ["scaffold.yaml", "scaffold.json"] {
            let path = dir.path().join(file);
            save_template(&template, &path).unwrap();
            let reloaded = load_template(&path).unwrap();
            assert_eq!(reloaded, template);

            let result = validate_template(&workbook, &reloaded).unwrap();
            assert!(result.valid, "{:?}", result.errors);
        }
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let template = scaffold_template("Scaffold", &Default::default());
        assert!(save_template(&template, dir.path().join("scaffold.txt")).is_err());
    }
}
