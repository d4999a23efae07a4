//! Error types for the form layer.

use thiserror::Error;

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while editing or submitting a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Required fields left empty at submit. Surfaced inline; the form
    /// stays open and nothing is stored.
    #[error("required fields are empty: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    /// Edit addressed to a field the schema does not declare.
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Select value outside the declared option universe.
    #[error("unknown option {option:?} for field {field}")]
    UnknownOption { field: String, option: String },

    /// Input shape does not fit the field kind, e.g. a toggle sent to a
    /// text field.
    #[error("input does not fit field {field}")]
    KindMismatch { field: String },
}
