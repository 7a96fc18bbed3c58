//! TableError for view state changes

/// Error type for invalid table view operations.
///
/// Filtering and sorting themselves never fail; these errors report a
/// caller asking for a column or filter type the table does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No column has this accessor.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The column names a filter type that is not registered.
    #[error("column '{column}' uses unregistered filter type '{filter_type}'")]
    UnknownFilterType { column: String, filter_type: String },

    /// The column has filtering disabled.
    #[error("column '{0}' is not filterable")]
    NotFilterable(String),

    /// The column has sorting disabled.
    #[error("column '{0}' is not sortable")]
    NotSortable(String),
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn(column.into())
    }

    /// Creates a new unknown filter type error.
    pub fn unknown_filter_type(column: impl Into<String>, filter_type: impl Into<String>) -> Self {
        Self::UnknownFilterType {
            column: column.into(),
            filter_type: filter_type.into(),
        }
    }
}
