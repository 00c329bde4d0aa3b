//! The binding engine: header-driven column resolution and the row loop.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use rowbind_model::{
    BindError, BindReport, BindWarning, DynRecord, FieldKind, FieldValue, LabelMapping, Record,
    RecordSchema, Result,
};

use crate::coerce::coerce;
use crate::source::RowSource;
use crate::timestamp::TimestampFormats;

/// Resolution policy when several fields declare the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// The first declaring field keeps the key.
    #[default]
    FirstWins,
    /// The last declaring field takes the key over.
    LastWins,
    /// Fail with [`BindError::DuplicateFieldKey`] before any row is read.
    Reject,
}

/// Tuning for a bind run.
#[derive(Debug, Clone, Default)]
pub struct BindOptions {
    /// Collect per-cell coercion failures as [`BindWarning`]s. Bound values
    /// are identical either way; warnings never abort the run.
    pub strict: bool,
    /// Policy for one key declared by several fields.
    pub duplicate_keys: DuplicateKeys,
    /// Timestamp layout tiers.
    pub formats: TimestampFormats,
}

/// Configured binding engine.
///
/// A `Binder` holds no per-run state: each call builds its own field table
/// and column table, so one engine may serve any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    options: BindOptions,
}

impl Binder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: BindOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Bind every data row of `rows` into `out`.
    ///
    /// The first row is the header: it resolves column positions and is never
    /// appended. Every later row becomes one record, in source order. Header
    /// cells matching no mapping entry, and mapping entries naming no
    /// declared field key, are ignored.
    ///
    /// # Errors
    ///
    /// Fatal conditions only: a rejected duplicate key, an assignment the
    /// record refused, or a row-source failure. Records appended before the
    /// failure stay in `out`, so on error the output must be treated as
    /// partial.
    pub fn bind<S, R>(
        &self,
        rows: &mut S,
        mapping: &LabelMapping,
        out: &mut Vec<R>,
    ) -> Result<BindReport>
    where
        S: RowSource + ?Sized,
        R: Record,
    {
        let table = self.field_table(R::fields().iter().map(|f| (f.key, f.kind)))?;
        let mut report = BindReport::default();
        let mut columns: Option<Vec<ColumnBinding>> = None;

        while rows.advance()? {
            let cells = rows.cells()?;
            let Some(bound) = columns.as_ref() else {
                columns = Some(resolve_columns(mapping, &table, cells));
                continue;
            };

            let row = report.records + 1;
            trace!(row, cells = cells.len(), "binding row");
            let mut record = R::default();
            for binding in bound {
                let text = cell_text(cells, binding.column);
                let value = self.coerce_cell(binding, row, text, &mut report);
                if !record.assign(&binding.key, value) {
                    return Err(BindError::InvalidField(binding.key.clone()));
                }
            }
            out.push(record);
            report.records += 1;
        }

        debug!(
            records = report.records,
            warnings = report.warnings.len(),
            "bind complete"
        );
        Ok(report)
    }

    /// Bind rows into dynamic records shaped by `schema`.
    ///
    /// Same loop as [`Binder::bind`], with assignment by schema slot instead
    /// of by key.
    ///
    /// # Errors
    ///
    /// As [`Binder::bind`].
    pub fn bind_dyn<S>(
        &self,
        rows: &mut S,
        mapping: &LabelMapping,
        schema: &RecordSchema,
        out: &mut Vec<DynRecord>,
    ) -> Result<BindReport>
    where
        S: RowSource + ?Sized,
    {
        let table = self.field_table(schema.fields().iter().map(|f| (f.key.as_str(), f.kind)))?;
        let mut report = BindReport::default();
        let mut columns: Option<Vec<ColumnBinding>> = None;

        while rows.advance()? {
            let cells = rows.cells()?;
            let Some(bound) = columns.as_ref() else {
                columns = Some(resolve_columns(mapping, &table, cells));
                continue;
            };

            let row = report.records + 1;
            trace!(row, cells = cells.len(), "binding row");
            let mut record = schema.zero_record();
            for binding in bound {
                let text = cell_text(cells, binding.column);
                let value = self.coerce_cell(binding, row, text, &mut report);
                if !record.assign(binding.slot, value) {
                    return Err(BindError::InvalidField(binding.key.clone()));
                }
            }
            out.push(record);
            report.records += 1;
        }

        debug!(
            records = report.records,
            warnings = report.warnings.len(),
            "bind complete"
        );
        Ok(report)
    }

    /// Coerce one cell, falling back to the zero value on a miss.
    fn coerce_cell(
        &self,
        binding: &ColumnBinding,
        row: usize,
        text: &str,
        report: &mut BindReport,
    ) -> FieldValue {
        match coerce(binding.kind, text, &self.options.formats) {
            Some(value) => value,
            None => {
                debug!(
                    row,
                    column = binding.column,
                    key = %binding.key,
                    kind = %binding.kind,
                    "cell did not coerce, leaving the zero value"
                );
                if self.options.strict {
                    report.warnings.push(BindWarning {
                        row,
                        column: binding.column,
                        key: binding.key.clone(),
                        kind: binding.kind,
                        text: text.to_string(),
                    });
                }
                FieldValue::zero(binding.kind)
            }
        }
    }

    /// Key lookup table honoring the duplicate-key policy.
    fn field_table<'a, I>(&self, fields: I) -> Result<FieldTable>
    where
        I: Iterator<Item = (&'a str, FieldKind)>,
    {
        let mut table = FieldTable::new();
        for (slot, (key, kind)) in fields.enumerate() {
            match self.options.duplicate_keys {
                DuplicateKeys::FirstWins => {
                    table.entry(key.to_string()).or_insert((kind, slot));
                }
                DuplicateKeys::LastWins => {
                    table.insert(key.to_string(), (kind, slot));
                }
                DuplicateKeys::Reject => {
                    if table.insert(key.to_string(), (kind, slot)).is_some() {
                        return Err(BindError::DuplicateFieldKey(key.to_string()));
                    }
                }
            }
        }
        Ok(table)
    }
}

/// One-shot bind with default options, report discarded.
///
/// # Errors
///
/// Same conditions as [`Binder::bind`].
pub fn bind<S, R>(rows: &mut S, mapping: &LabelMapping, out: &mut Vec<R>) -> Result<()>
where
    S: RowSource + ?Sized,
    R: Record,
{
    Binder::new().bind(rows, mapping, out).map(|_| ())
}

/// Field key to (declared kind, declaration slot).
type FieldTable = BTreeMap<String, (FieldKind, usize)>;

/// One bound column: which field key the cell feeds and how it is coerced.
#[derive(Debug, Clone)]
struct ColumnBinding {
    column: usize,
    key: String,
    kind: FieldKind,
    slot: usize,
}

/// Join the header row against the mapping and the field table.
///
/// Both lookups must succeed for a column to bind; everything else is
/// silently ignored. Computed once per run and discarded with it.
fn resolve_columns(
    mapping: &LabelMapping,
    table: &FieldTable,
    header: &[String],
) -> Vec<ColumnBinding> {
    let mut bindings = Vec::new();
    for (column, cell) in header.iter().enumerate() {
        let Some(key) = mapping.key_for(cell) else {
            continue;
        };
        let Some(&(kind, slot)) = table.get(key) else {
            continue;
        };
        bindings.push(ColumnBinding {
            column,
            key: key.to_string(),
            kind,
            slot,
        });
    }
    debug!(
        columns = header.len(),
        bound = bindings.len(),
        "resolved header"
    );
    bindings
}

fn cell_text(cells: &[String], column: usize) -> &str {
    cells.get(column).map(String::as_str).unwrap_or("")
}
