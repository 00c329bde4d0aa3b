//! Shared vocabulary for row binding: semantic field kinds, coerced values,
//! record descriptors, label mappings, and the error taxonomy.

pub mod error;
pub mod kind;
pub mod mapping;
pub mod record;
pub mod report;
pub mod value;

pub use error::{BindError, Result};
pub use kind::FieldKind;
pub use mapping::LabelMapping;
pub use record::{DynRecord, FieldDef, FieldSpec, Record, RecordSchema};
pub use report::{BindReport, BindWarning};
pub use value::FieldValue;
