//! Record descriptors: the static trait for compiled destination types and
//! the runtime schema for configuration-described ones.

use serde::{Deserialize, Serialize};

use crate::error::{BindError, Result};
use crate::kind::FieldKind;
use crate::value::FieldValue;

/// One bindable field of a compiled record type.
///
/// `key` is matched byte-for-byte against mapping values; only the header
/// label side of a lookup is case-insensitive (see [`crate::LabelMapping`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(key: &'static str, kind: FieldKind) -> Self {
        Self { key, kind }
    }
}

/// A destination record type the binder can populate.
///
/// Implementations register their bindable fields once, at the type level,
/// instead of having annotations re-discovered on every call. A field absent
/// from [`Record::fields`] is invisible to the binder.
///
/// `assign` must accept every key listed by `fields` (with a value of the
/// declared kind) and return `false` for anything else; the binder turns a
/// `false` into [`BindError::InvalidField`].
pub trait Record: Default {
    /// Bindable fields in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Store a coerced value into the field registered under `key`.
    fn assign(&mut self, key: &str, value: FieldValue) -> bool;
}

/// Runtime descriptor entry, the owned counterpart of [`FieldSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub key: String,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(key: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}

/// Record shape for destinations described at runtime (configuration files,
/// user input) rather than by a compiled type.
///
/// Field order is preserved: it is the slot order of every [`DynRecord`]
/// produced against this schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Build a schema from its fields.
    ///
    /// # Errors
    ///
    /// [`BindError::InvalidElement`] when `fields` is empty: an element with
    /// no bindable fields is not a structured record.
    pub fn new(fields: Vec<FieldDef>) -> Result<Self> {
        if fields.is_empty() {
            return Err(BindError::InvalidElement);
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Slot of the field declared under `key`, if any.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// A fresh record with every field at its zero value.
    #[must_use]
    pub fn zero_record(&self) -> DynRecord {
        DynRecord {
            values: self
                .fields
                .iter()
                .map(|f| FieldValue::zero(f.kind))
                .collect(),
        }
    }
}

/// One bound row for a [`RecordSchema`] destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynRecord {
    values: Vec<FieldValue>,
}

impl DynRecord {
    /// Values in schema slot order.
    #[must_use]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&FieldValue> {
        self.values.get(slot)
    }

    /// Store a coerced value at `slot`. Returns `false` when the slot does
    /// not exist, the dynamic analog of a rejected [`Record::assign`].
    pub fn assign(&mut self, slot: usize, value: FieldValue) -> bool {
        match self.values.get_mut(slot) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_specs_are_const_constructible() {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("age", FieldKind::Int),
        ];
        assert_eq!(FIELDS[0].key, "name");
        assert_eq!(FIELDS[1].kind, FieldKind::Int);
    }

    #[test]
    fn empty_schema_is_not_a_record_shape() {
        let err = RecordSchema::new(Vec::new()).unwrap_err();
        assert!(matches!(err, BindError::InvalidElement));
    }

    #[test]
    fn zero_record_matches_schema_kinds() {
        let schema = RecordSchema::new(vec![
            FieldDef::new("name", FieldKind::Text),
            FieldDef::new("age", FieldKind::Int),
            FieldDef::new("joined", FieldKind::Timestamp),
        ])
        .unwrap();
        let record = schema.zero_record();
        assert_eq!(record.values().len(), 3);
        assert_eq!(record.get(1).unwrap().kind(), FieldKind::Int);
        assert_eq!(schema.position("joined"), Some(2));
        assert_eq!(schema.position("missing"), None);
    }

    #[test]
    fn assign_rejects_out_of_range_slots() {
        let schema = RecordSchema::new(vec![FieldDef::new("name", FieldKind::Text)]).unwrap();
        let mut record = schema.zero_record();
        assert!(record.assign(0, FieldValue::Text("x".to_string())));
        assert!(!record.assign(1, FieldValue::Text("y".to_string())));
        assert_eq!(record.get(0).unwrap().as_text(), Some("x"));
    }
}
