//! Row sources: the forward-only cursor contract and the in-memory reference
//! implementation.

use rowbind_model::{BindError, Result};

/// Forward-only provider of header and data rows.
///
/// The binder drives a source to exhaustion exactly once: `advance` moves the
/// cursor, `cells` exposes the current row. Implementations never need to
/// seek backwards and never see the binder retain a row beyond the current
/// loop iteration.
pub trait RowSource {
    /// Move to the next row. `Ok(false)` once the source is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Cells of the current row, in column order.
    ///
    /// Only meaningful after `advance` returned `Ok(true)`.
    fn cells(&self) -> Result<&[String]>;
}

/// In-memory row source over owned cell text.
///
/// The cursor starts before the first row; [`MemoryRows::rewind`] puts it
/// back so the same content can be bound again.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    rows: Vec<Vec<String>>,
    cursor: Option<usize>,
}

impl MemoryRows {
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows, cursor: None }
    }

    /// Convenience constructor from borrowed cell text.
    pub fn from_rows<'a, R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = &'a str>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_owned).collect())
                .collect(),
        )
    }

    /// Put the cursor back before the first row.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for MemoryRows {
    fn advance(&mut self) -> Result<bool> {
        let next = self.cursor.map_or(0, |c| c.saturating_add(1));
        self.cursor = Some(next);
        Ok(next < self.rows.len())
    }

    fn cells(&self) -> Result<&[String]> {
        self.cursor
            .and_then(|c| self.rows.get(c))
            .map(Vec::as_slice)
            .ok_or_else(|| BindError::from_source("no current row"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_rows_in_order() {
        let mut rows = MemoryRows::from_rows(vec![vec!["a", "b"], vec!["c"]]);
        assert!(rows.advance().unwrap());
        assert_eq!(rows.cells().unwrap(), ["a".to_string(), "b".to_string()]);
        assert!(rows.advance().unwrap());
        assert_eq!(rows.cells().unwrap(), ["c".to_string()]);
        assert!(!rows.advance().unwrap());
        assert!(!rows.advance().unwrap());
    }

    #[test]
    fn cells_before_first_advance_is_an_error() {
        let rows = MemoryRows::from_rows(vec![vec!["a"]]);
        assert!(rows.cells().is_err());
    }

    #[test]
    fn rewind_restarts_the_cursor() {
        let mut rows = MemoryRows::from_rows(vec![vec!["a"]]);
        assert!(rows.advance().unwrap());
        assert!(!rows.advance().unwrap());
        rows.rewind();
        assert!(rows.advance().unwrap());
        assert_eq!(rows.cells().unwrap(), ["a".to_string()]);
    }

    #[test]
    fn empty_source_is_exhausted_immediately() {
        let mut rows = MemoryRows::default();
        assert!(rows.is_empty());
        assert!(!rows.advance().unwrap());
    }
}
