use thiserror::Error;

/// Fatal binding errors.
///
/// Per-cell coercion failures are deliberately not here: malformed numeric,
/// boolean, or timestamp text leaves the field zero-valued and the run keeps
/// going. Strict mode reports those as [`crate::BindWarning`]s instead.
#[derive(Debug, Error)]
pub enum BindError {
    /// The erased destination is not a registered growable record collection.
    #[error("destination must be a growable collection of records")]
    InvalidDestination,

    /// The destination element type declares no bindable fields.
    #[error("destination element type has no bindable fields")]
    InvalidElement,

    /// A resolved field key was rejected by the record's assignment hook.
    /// Signals a descriptor/record mismatch, i.e. a caller-side bug.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// A declared semantic type is not one of the recognized coercion kinds.
    #[error("unsupported field type: {0}")]
    UnsupportedFieldType(String),

    /// The same field key is declared by more than one field.
    #[error("duplicate field key: {0}")]
    DuplicateFieldKey(String),

    /// Failure reported by the row source while advancing or reading.
    #[error("row source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl BindError {
    /// Wrap an arbitrary row-source failure.
    pub fn from_source(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Source(err.into())
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
