//! Type-identity dispatch for callers that only hold a type-erased
//! destination.
//!
//! The registry maps the [`TypeId`] of a destination collection to a
//! monomorphized bind entry point. Handing it a destination it has never
//! seen, or one that is not a registered record collection at all, is the
//! invalid-destination case.

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use rowbind_model::{BindError, BindReport, LabelMapping, Record, Result};

use crate::binder::Binder;
use crate::source::RowSource;

type ErasedBind = fn(&Binder, &mut dyn RowSource, &LabelMapping, &mut dyn Any) -> Result<BindReport>;

#[derive(Debug, Clone, Copy)]
struct RegistryEntry {
    element: &'static str,
    run: ErasedBind,
}

/// Registered destination types, keyed by the [`TypeId`] of their `Vec`.
#[derive(Debug, Clone, Default)]
pub struct BinderRegistry {
    entries: BTreeMap<TypeId, RegistryEntry>,
}

impl BinderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `Vec<R>` an acceptable erased destination.
    ///
    /// Registering the same type again is a no-op.
    pub fn register<R>(&mut self)
    where
        R: Record + 'static,
    {
        self.entries.insert(
            TypeId::of::<Vec<R>>(),
            RegistryEntry {
                element: type_name::<R>(),
                run: run_erased::<R>,
            },
        );
    }

    #[must_use]
    pub fn contains<R>(&self) -> bool
    where
        R: Record + 'static,
    {
        self.entries.contains_key(&TypeId::of::<Vec<R>>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Element type names of every registered destination.
    pub fn elements(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.element)
    }

    /// Bind into a destination known only as `&mut dyn Any`.
    ///
    /// # Errors
    ///
    /// [`BindError::InvalidDestination`] when `out` is not a `Vec` of a
    /// registered record type; otherwise whatever [`Binder::bind`] returns.
    pub fn bind_erased(
        &self,
        binder: &Binder,
        rows: &mut dyn RowSource,
        mapping: &LabelMapping,
        out: &mut dyn Any,
    ) -> Result<BindReport> {
        let entry = self
            .entries
            .get(&(*out).type_id())
            .ok_or(BindError::InvalidDestination)?;
        (entry.run)(binder, rows, mapping, out)
    }
}

fn run_erased<R>(
    binder: &Binder,
    rows: &mut dyn RowSource,
    mapping: &LabelMapping,
    out: &mut dyn Any,
) -> Result<BindReport>
where
    R: Record + 'static,
{
    let out = out
        .downcast_mut::<Vec<R>>()
        .ok_or(BindError::InvalidDestination)?;
    binder.bind(rows, mapping, out)
}
