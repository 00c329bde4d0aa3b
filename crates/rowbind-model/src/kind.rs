//! Semantic field kinds recognized by the binder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of semantic types a bindable field may declare.
///
/// Coercion dispatches by matching on this enum, resolved once per bound
/// column when the field table is built, never by re-inspecting cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Cell text carried verbatim.
    Text,
    /// Base-10 signed integer.
    Int,
    /// Base-10 unsigned integer.
    UInt,
    /// Base-10 floating point.
    Float,
    /// Boolean literal: `1`/`t`/`true`/`0`/`f`/`false`, any case.
    Bool,
    /// Timestamp with tiered layout fallback.
    Timestamp,
}

impl FieldKind {
    /// Canonical lower-case name, as written in schema files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Int => "int",
            FieldKind::UInt => "uint",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::Timestamp => "timestamp",
        }
    }

    /// Every recognized kind, in a stable order.
    #[must_use]
    pub fn all() -> &'static [FieldKind] {
        &[
            FieldKind::Text,
            FieldKind::Int,
            FieldKind::UInt,
            FieldKind::Float,
            FieldKind::Bool,
            FieldKind::Timestamp,
        ]
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FieldKind::Text),
            "int" => Ok(FieldKind::Int),
            "uint" => Ok(FieldKind::UInt),
            "float" => Ok(FieldKind::Float),
            "bool" => Ok(FieldKind::Bool),
            "timestamp" => Ok(FieldKind::Timestamp),
            _ => Err(format!("Unknown field kind: {s}")),
        }
    }
}
