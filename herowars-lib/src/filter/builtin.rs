//! Built-in filter types.

use std::collections::HashSet;

use super::{FilterFn, FilterValue, FuzzyQuery};
use crate::table::Row;

/// Name of the ranked fuzzy text filter.
pub const FUZZY_TEXT: &str = "fuzzy_text";
/// Name of the case-insensitive prefix filter.
pub const TEXT: &str = "text";
/// Name of the inclusive numeric range filter.
pub const BETWEEN: &str = "between";
/// Name of the exact-value select filter.
pub const EQUALS: &str = "equals";
/// Name of the numeric lower-bound filter.
pub const GREATER_THAN: &str = "greater_than";

/// Text filters drop out when the value has no usable text.
fn lacks_text(value: &FilterValue) -> bool {
    value.as_text().is_none_or(|text| text.is_empty())
}

/// Fuzzy match of the cell text against the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyText;

impl FilterFn for FuzzyText {
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        let Some(query) = value.as_text() else {
            return Vec::new();
        };
        let mut fuzzy = FuzzyQuery::new(&query);
        rows.into_iter()
            .filter(|row| {
                let cell = row.value(column);
                !cell.is_null() && fuzzy.score(&cell.display()).is_some()
            })
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        lacks_text(value)
    }
}

/// Case-insensitive "starts with". Rows with a missing value pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl FilterFn for Text {
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        let Some(prefix) = value.as_text() else {
            return Vec::new();
        };
        let prefix = prefix.to_lowercase();
        rows.into_iter()
            .filter(|row| {
                let cell = row.value(column);
                cell.is_null() || cell.display().to_lowercase().starts_with(&prefix)
            })
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        lacks_text(value)
    }
}

/// Inclusive numeric range with optional bounds.
///
/// Bounds given in the wrong order are swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Between;

impl FilterFn for Between {
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        let Some((min, max)) = value.as_range() else {
            return Vec::new();
        };
        let mut min = min.unwrap_or(f64::NEG_INFINITY);
        let mut max = max.unwrap_or(f64::INFINITY);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        rows.into_iter()
            .filter(|row| {
                row.value(column)
                    .as_f64()
                    .is_some_and(|n| n >= min && n <= max)
            })
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        !matches!(value.as_range(), Some((Some(_), _)) | Some((_, Some(_))))
    }
}

/// Exact match against one of the column's observed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Equals;

impl FilterFn for Equals {
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        let Some(wanted) = value.as_text() else {
            return Vec::new();
        };
        rows.into_iter()
            .filter(|row| {
                let cell = row.value(column);
                !cell.is_null() && cell.display() == wanted
            })
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        lacks_text(value)
    }
}

/// Keeps numeric cells greater than or equal to the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreaterThan;

impl FilterFn for GreaterThan {
    fn filter<'a>(&self, rows: Vec<Row<'a>>, column: &str, value: &FilterValue) -> Vec<Row<'a>> {
        let Some(threshold) = value.as_number() else {
            return Vec::new();
        };
        rows.into_iter()
            .filter(|row| row.value(column).as_f64().is_some_and(|n| n >= threshold))
            .collect()
    }

    fn auto_remove(&self, value: &FilterValue) -> bool {
        value.as_number().is_none()
    }
}

/// Distinct display values of a column, in first-seen order.
///
/// Missing values are skipped. These are the options of a select filter.
pub fn distinct_values(rows: &[Row<'_>], column: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| row.value(column))
        .filter(|cell| !cell.is_null())
        .map(|cell| cell.display())
        .filter(|text| seen.insert(text.clone()))
        .collect()
}
