//! FieldError for typed Record access

/// Error type for the typed getters on [`Record`](crate::model::Record).
///
/// Filters and comparators never produce this error: they read fields
/// leniently and treat an absent field as missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The record has no field with this accessor.
    #[error("Field '{field}' not found in record")]
    Missing { field: String },

    /// The field holds a value of another type.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
