//! Structured outcome of a bind run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;

/// One recoverable coercion failure, recorded in strict mode.
///
/// The field was left at its zero value and the run continued; warnings never
/// abort a bind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindWarning {
    /// 1-based data row ordinal (the header row is not counted).
    pub row: usize,
    /// Zero-based column index in the source row.
    pub column: usize,
    /// Field key the column is bound to.
    pub key: String,
    /// Declared kind the cell failed to coerce into.
    pub kind: FieldKind,
    /// Offending cell text.
    pub text: String,
}

impl fmt::Display for BindWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {}: {:?} is not a valid {} for field '{}'",
            self.row, self.column, self.text, self.kind, self.key
        )
    }
}

/// Summary returned by the binder: how many records were appended, plus any
/// strict-mode findings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindReport {
    /// Data rows appended to the output collection.
    pub records: usize,
    /// Empty unless the run was strict.
    pub warnings: Vec<BindWarning>,
}

impl BindReport {
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warnings recorded against one field key.
    pub fn warnings_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a BindWarning> {
        self.warnings.iter().filter(move |w| w.key == key)
    }
}
