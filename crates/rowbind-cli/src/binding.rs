//! Binding files: the on-disk description of fields and label mapping.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use rowbind_model::{BindError, FieldDef, FieldKind, LabelMapping, RecordSchema};

/// Parsed binding file.
///
/// ```json
/// {
///   "fields": [
///     { "key": "name", "kind": "text" },
///     { "key": "age", "kind": "int" }
///   ],
///   "mapping": { "Name": "name", "Age": "age" }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BindingFile {
    pub fields: Vec<BindingField>,
    #[serde(default)]
    pub mapping: BTreeMap<String, String>,
}

/// One field declaration in a binding file.
///
/// `kind` stays a plain string here so an unsupported name surfaces through
/// the binding error taxonomy instead of as a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingField {
    pub key: String,
    pub kind: String,
}

impl BindingFile {
    /// Load and parse a binding file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read binding file: {}", path.display()))?;
        let file: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse binding file: {}", path.display()))?;
        Ok(file)
    }

    /// The record schema the file describes.
    ///
    /// # Errors
    ///
    /// [`BindError::UnsupportedFieldType`] for a kind name outside the
    /// supported set, [`BindError::InvalidElement`] when no fields are
    /// declared.
    pub fn schema(&self) -> rowbind_model::Result<RecordSchema> {
        let mut defs = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let kind = field
                .kind
                .parse::<FieldKind>()
                .map_err(|_| BindError::UnsupportedFieldType(field.kind.clone()))?;
            defs.push(FieldDef::new(field.key.clone(), kind));
        }
        RecordSchema::new(defs)
    }

    /// Header-label mapping declared by the file.
    #[must_use]
    pub fn mapping(&self) -> LabelMapping {
        LabelMapping::from(&self.mapping)
    }
}
