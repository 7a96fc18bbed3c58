//! Column filter evaluation.
//!
//! A filter type turns `(rows, column, value)` into the subset of rows that
//! pass, preserving their relative order. Filter types are registered by
//! name in a [`FilterTypes`] registry and referenced by name from each
//! [`Column`](crate::column::Column).
//!
//! Every filter type also carries an auto-removal rule. When a view sets a
//! filter value that the rule rejects (empty text, a range with no numeric
//! bound), the filter is removed instead of stored.
//!
//! # Built-in Filter Types
//!
//! | Name | Behavior | Auto-removed when |
//! |------|----------|-------------------|
//! | `fuzzy_text` | ranked fuzzy match, missing cells fail | text is empty |
//! | `text` | case-insensitive prefix, missing cells pass | text is empty |
//! | `between` | inclusive numeric range, open bounds allowed | no bound is a number |
//! | `equals` | exact match on one observed value | text is empty |
//! | `greater_than` | numeric `>=` | value is not a number |
//!
//! # Example
//!
//! ```
//! use herowars_lib::filter::{FilterTypes, FilterValue, predicate};
//! use herowars_lib::model::Value;
//!
//! let mut types = FilterTypes::default();
//! types.register(
//!     "odd",
//!     predicate(
//!         |cell: &Value, _: &FilterValue| cell.as_f64().is_some_and(|n| n % 2.0 == 1.0),
//!         |_: &FilterValue| false,
//!     ),
//! );
//! assert!(types.contains("odd"));
//! ```

pub mod builtin;
mod fuzzy;
mod value;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::model::Value;
use crate::table::Row;

pub use builtin::distinct_values;
pub use fuzzy::FilterMatch;
pub use fuzzy::fuzzy_filter;
pub(crate) use fuzzy::FuzzyQuery;
pub use value::FilterValue;
pub use value::parse_number;

/// A named filter type.
pub trait FilterFn: Send + Sync {
    /// Returns the rows whose `column` passes for `value`, in input order.
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>>;

    /// Returns `true` if setting `value` should remove the filter instead.
    fn auto_remove(&self, value: &FilterValue) -> bool {
        value.is_empty()
    }
}

/// A filter type built from a per-cell predicate and an auto-removal rule.
///
/// Created with [`predicate`].
pub struct Predicate<M, R> {
    matches: M,
    auto_remove: R,
}

/// Builds a filter type from closures.
///
/// `matches` decides each cell; `auto_remove` decides which values remove
/// the filter.
pub fn predicate<M, R>(matches: M, auto_remove: R) -> Predicate<M, R>
where
    M: Fn(&Value, &FilterValue) -> bool + Send + Sync,
    R: Fn(&FilterValue) -> bool + Send + Sync,
{
    Predicate {
        matches,
        auto_remove,
    }
}

impl<M, R> FilterFn for Predicate<M, R>
where
    M: Fn(&Value, &FilterValue) -> bool + Send + Sync,
    R: Fn(&FilterValue) -> bool + Send + Sync,
{
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        rows.into_iter()
            .filter(|row| (self.matches)(row.value(column), value))
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        (self.auto_remove)(value)
    }
}

/// Registry of filter types by name.
///
/// `FilterTypes::default()` holds the built-in types; [`register`](Self::register)
/// adds custom ones or replaces a built-in.
#[derive(Clone)]
pub struct FilterTypes {
    types: HashMap<String, Arc<dyn FilterFn>>,
}

impl FilterTypes {
    /// Creates a registry with no filter types.
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers a filter type, returning the one it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        filter: impl FilterFn + 'static,
    ) -> Option<Arc<dyn FilterFn>> {
        let name = name.into();
        debug!("Registering filter type '{}'", name);
        self.types.insert(name, Arc::new(filter))
    }

    /// Registers a filter type (builder pattern).
    pub fn with(mut self, name: impl Into<String>, filter: impl FilterFn + 'static) -> Self {
        self.register(name, filter);
        self
    }

    /// Looks up a filter type.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn FilterFn>> {
        self.types.get(name)
    }

    /// Returns `true` if a filter type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for FilterTypes {
    fn default() -> Self {
        Self::empty()
            .with(builtin::FUZZY_TEXT, builtin::FuzzyText)
            .with(builtin::TEXT, builtin::Text)
            .with(builtin::BETWEEN, builtin::Between)
            .with(builtin::EQUALS, builtin::Equals)
            .with(builtin::GREATER_THAN, builtin::GreaterThan)
    }
}

impl fmt::Debug for FilterTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterTypes")
            .field("types", &self.names())
            .finish()
    }
}
