//! Coerced cell values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;

/// One coerced cell value, tagged by semantic kind.
///
/// Numeric payloads use the widest width; record implementations narrow
/// explicitly where their fields are smaller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    /// The zero value for a kind: empty text, numeric zero, `false`, or the
    /// epoch timestamp.
    #[must_use]
    pub fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Int => FieldValue::Int(0),
            FieldKind::UInt => FieldValue::UInt(0),
            FieldKind::Float => FieldValue::Float(0.0),
            FieldKind::Bool => FieldValue::Bool(false),
            FieldKind::Timestamp => FieldValue::Timestamp(NaiveDateTime::default()),
        }
    }

    /// The kind this value belongs to.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::UInt(_) => FieldKind::UInt,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values_keep_their_kind() {
        for kind in FieldKind::all() {
            assert_eq!(FieldValue::zero(*kind).kind(), *kind);
        }
    }

    #[test]
    fn zero_timestamp_is_epoch() {
        let zero = FieldValue::zero(FieldKind::Timestamp);
        let ts = zero.as_timestamp().unwrap();
        assert_eq!(ts, NaiveDateTime::default());
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn serde_tags_by_kind() {
        let json = serde_json::to_string(&FieldValue::Int(26)).unwrap();
        assert_eq!(json, "{\"kind\":\"int\",\"value\":26}");
    }

    #[test]
    fn accessors_reject_other_kinds() {
        let value = FieldValue::Text("x".to_string());
        assert_eq!(value.as_text(), Some("x"));
        assert_eq!(value.as_int(), None);
        assert_eq!(value.as_bool(), None);
    }
}
