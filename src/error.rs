//! Error types for fieldmap.
//!
//! All errors are strongly typed using thiserror. The layers mirror the
//! fault lines of a copy pass: [`TableError`] at descriptor-table build
//! time, [`AccessError`] when a reader fails (non-fatal, reported and
//! skipped), [`ValidationError`] when a target's writer rejects a value
//! (fatal to the remaining fields of that pass).

use thiserror::Error;

use crate::value::ValueType;

/// Faults in a descriptor table declaration.
///
/// These surface at table-build time, the static-table analogue of an
/// accessor that reflection would silently pass over.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Accessor name '{name}' is not a valid reader (expected get<X> or is<X>)")]
    InvalidReaderName { name: String },

    #[error("Accessor name '{name}' is not a valid writer (expected set<X>)")]
    InvalidWriterName { name: String },

    #[error("Reader 'is{suffix}' declares type {declared}, but the is-prefix is reserved for bool")]
    IsPrefixNotBool {
        suffix: String,
        declared: ValueType,
    },

    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    #[error("Writer for '{field}' declares type {writer_type}, but its reader declares {reader_type}")]
    WriterTypeConflict {
        field: String,
        reader_type: ValueType,
        writer_type: ValueType,
    },
}

/// A reader failed while producing a field's value.
///
/// This is the descriptor-table counterpart of a reflective invocation
/// error: the copier and printer treat it as a per-field diagnostic, not
/// a failure of the whole operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to read field '{field}': {message}")]
pub struct AccessError {
    /// Name of the field whose reader failed.
    pub field: String,
    /// Free-text description of what went wrong inside the reader.
    pub message: String,
}

impl AccessError {
    /// Creates an access error for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A writer rejected a value.
///
/// Writers own their record's domain invariants; the copier never
/// second-guesses them and never swallows their rejections.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Field '{field}' rejected value: {reason}")]
    Rejected { field: String, reason: String },

    #[error("Field '{field}' requires a value in [{min}, {max}], got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: ValueType,
        actual: ValueType,
    },

    #[error("No field named '{field}'")]
    UnknownField { field: String },

    #[error("Field '{field}' is not writable")]
    NotWritable { field: String },
}

impl ValidationError {
    /// Creates a free-text rejection for the given field.
    #[must_use]
    pub fn rejected(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Top-level error type for fieldmap operations.
#[derive(Debug, Error)]
pub enum FieldmapError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl FieldmapError {
    /// Returns true if this is a table-declaration error.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// Returns true if this is a reader access error.
    #[must_use]
    pub const fn is_access(&self) -> bool {
        matches!(self, Self::Access(_))
    }

    /// Returns true if this is a writer validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for fieldmap operations.
pub type FieldmapResult<T> = Result<T, FieldmapError>;
