//! Cell-text coercion into semantic field values.
//!
//! All failures here are recoverable by contract: the caller keeps the field
//! at its zero value and the bind run continues.

use rowbind_model::{FieldKind, FieldValue};

use crate::timestamp::{TimestampFormats, parse_timestamp};

/// Coerce `text` into a value of `kind`.
///
/// `None` is the recoverable miss. Text never fails.
#[must_use]
pub fn coerce(kind: FieldKind, text: &str, formats: &TimestampFormats) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => Some(FieldValue::Text(text.to_string())),
        FieldKind::Int => parse_i64(text).map(FieldValue::Int),
        FieldKind::UInt => parse_u64(text).map(FieldValue::UInt),
        FieldKind::Float => parse_f64(text).map(FieldValue::Float),
        FieldKind::Bool => parse_bool(text).map(FieldValue::Bool),
        FieldKind::Timestamp => parse_timestamp(text, formats).map(FieldValue::Timestamp),
    }
}

/// Base-10 signed integer. No trimming: stray whitespace is malformed input.
#[must_use]
pub fn parse_i64(text: &str) -> Option<i64> {
    text.parse().ok()
}

/// Base-10 unsigned integer. A minus sign is malformed input.
#[must_use]
pub fn parse_u64(text: &str) -> Option<u64> {
    text.parse().ok()
}

/// Base-10 float, including exponent notation.
#[must_use]
pub fn parse_f64(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Boolean literal, any case: `1`, `t`, `true`, `0`, `f`, `false`.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
