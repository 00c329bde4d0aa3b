//! Header-driven binding of tabular rows into typed records.
//!
//! This crate holds the binding engine itself:
//!
//! - **binder**: the row loop, column resolution, and bind options
//! - **coerce**: text-to-value coercion for every field kind
//! - **timestamp**: tiered timestamp parsing with replaceable layouts
//! - **source**: the [`RowSource`] trait and an in-memory implementation
//! - **registry**: type-identity dispatch for type-erased destinations
//!
//! The first row of a source is always the header; it decides which column
//! feeds which field. Cells that fail to coerce leave the field at its zero
//! value and never abort a run.
//!
//! # Example
//!
//! ```ignore
//! use rowbind_core::{MemoryRows, bind};
//! use rowbind_model::LabelMapping;
//!
//! let mut rows = MemoryRows::from_rows(vec![
//!     vec!["Name", "Age"],
//!     vec!["Kaye Goff", "26"],
//! ]);
//! let mapping: LabelMapping = [("Name", "name"), ("Age", "age")].into_iter().collect();
//!
//! let mut people: Vec<Person> = Vec::new();
//! bind(&mut rows, &mapping, &mut people)?;
//! ```

pub mod binder;
pub mod coerce;
pub mod registry;
pub mod source;
pub mod timestamp;

pub use binder::{BindOptions, Binder, DuplicateKeys, bind};
pub use coerce::coerce;
pub use registry::BinderRegistry;
pub use source::{MemoryRows, RowSource};
pub use timestamp::{
    DATE_FORMATS, DATETIME_FORMATS, TIME_FORMATS, TimestampFormats, parse_timestamp,
};
