//! Binding straight out of CSV files on disk.

use std::fs;

use tempfile::TempDir;

use rowbind_core::bind;
use rowbind_ingest::CsvRowSource;
use rowbind_model::{BindError, FieldKind, FieldSpec, FieldValue, LabelMapping, Record};

#[derive(Debug, Default, Clone, PartialEq)]
struct Contact {
    name: String,
    age: i64,
}

impl Record for Contact {
    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("age", FieldKind::Int),
        ];
        FIELDS
    }

    fn assign(&mut self, key: &str, value: FieldValue) -> bool {
        match (key, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("age", FieldValue::Int(v)) => self.age = v,
            _ => return false,
        }
        true
    }
}

fn contact_mapping() -> LabelMapping {
    [("Name", "name"), ("Age", "age")].into_iter().collect()
}

#[test]
fn binds_a_csv_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(
        &path,
        "Name,Age\nKaye Goff,26\nAdrienne Kirby,22\nJohn,abc\nShort Row\n",
    )
    .unwrap();

    let mut rows = CsvRowSource::open(&path).unwrap();
    let mut contacts: Vec<Contact> = Vec::new();
    bind(&mut rows, &contact_mapping(), &mut contacts).unwrap();

    let contact = |name: &str, age| Contact {
        name: name.to_string(),
        age,
    };
    // Malformed and missing cells bind as zero values, never as errors.
    assert_eq!(
        contacts,
        vec![
            contact("Kaye Goff", 26),
            contact("Adrienne Kirby", 22),
            contact("John", 0),
            contact("Short Row", 0),
        ]
    );
}

#[test]
fn bom_prefixed_header_still_matches_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.csv");
    fs::write(&path, "\u{feff}Name,Age\nKaye Goff,26\n").unwrap();

    let mut rows = CsvRowSource::open(&path).unwrap();
    let mut contacts: Vec<Contact> = Vec::new();
    bind(&mut rows, &contact_mapping(), &mut contacts).unwrap();
    assert_eq!(contacts[0].name, "Kaye Goff");
}

#[test]
fn missing_file_is_a_source_error() {
    let dir = TempDir::new().unwrap();
    let err = CsvRowSource::open(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, BindError::Source(_)));
    assert!(err.to_string().starts_with("row source error: "));
}

#[test]
fn invalid_utf8_surfaces_as_a_source_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, [b'N', b'a', b'm', b'e', b'\n', 0xff, 0xfe, b'\n']).unwrap();

    let mut rows = CsvRowSource::open(&path).unwrap();
    let mut contacts: Vec<Contact> = Vec::new();
    let err = bind(&mut rows, &contact_mapping(), &mut contacts).unwrap_err();
    assert!(matches!(err, BindError::Source(_)));
}
