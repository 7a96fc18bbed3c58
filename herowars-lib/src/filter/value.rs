//! Filter values entered through column filter controls.

use serde::Deserialize;
use serde::Serialize;

/// The value a user entered into a column's filter control.
///
/// Serializes untagged, so settings files can write a filter as a plain
/// string (`"ast"`), a number (`20000`) or a `[min, max]` pair with `null`
/// for an open bound (`[15, null]`).
///
/// # Example
///
/// ```
/// use herowars_lib::filter::FilterValue;
///
/// let name = FilterValue::text("ast");
/// let power = FilterValue::range(Some(15.0), None);
/// let typed = FilterValue::range_from_input("15", "abc");
/// assert_eq!(power, typed);
/// assert!(FilterValue::range_from_input("", "x").is_empty());
/// assert!(!name.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A single number (slider-style filters).
    Number(f64),
    /// Free text or a selected option.
    Text(String),
    /// An inclusive `[min, max]` range; `None` is an open bound.
    Range(Option<f64>, Option<f64>),
}

impl FilterValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    /// Creates a range value.
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        FilterValue::Range(min, max)
    }

    /// Creates a range from the raw text of two numeric inputs.
    ///
    /// Input that is not a finite number becomes an open bound.
    pub fn range_from_input(min: &str, max: &str) -> Self {
        FilterValue::Range(parse_number(min), parse_number(max))
    }

    /// Returns `true` for empty text and for ranges with no bounds.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Number(_) => false,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Range(min, max) => min.is_none() && max.is_none(),
        }
    }

    /// The value as query text, if it has a textual form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FilterValue::Text(s) => Some(s.clone()),
            FilterValue::Number(n) => Some(n.to_string()),
            FilterValue::Range(..) => None,
        }
    }

    /// The value as a single number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// The `(min, max)` bounds of a range value.
    pub fn as_range(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            FilterValue::Range(min, max) => Some((
                min.filter(|n| n.is_finite()),
                max.filter(|n| n.is_finite()),
            )),
            _ => None,
        }
    }
}

/// Parses user input as a finite number, ignoring surrounding whitespace.
pub fn parse_number(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("1.5"), Some(1.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("twelve"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let text: FilterValue = serde_json::from_str(r#""ast""#).unwrap();
        assert_eq!(text, FilterValue::text("ast"));

        let number: FilterValue = serde_json::from_str("20000").unwrap();
        assert_eq!(number, FilterValue::Number(20_000.0));

        let range: FilterValue = serde_json::from_str("[15, null]").unwrap();
        assert_eq!(range, FilterValue::range(Some(15.0), None));
    }
}
