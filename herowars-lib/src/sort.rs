//! Sort comparator over table rows.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;
use crate::table::Row;

/// One sort key: a column and a direction.
///
/// # Example
///
/// ```
/// use herowars_lib::sort::SortBy;
///
/// let keys = vec![SortBy::desc("Power"), SortBy::asc("Hero")];
/// assert!(keys[0].desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    /// Column accessor.
    pub column: String,
    /// Sort descending.
    #[serde(default)]
    pub desc: bool,
}

impl SortBy {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: false,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            desc: true,
        }
    }
}

/// Rank of each value kind; lower kinds sort first.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::String(_) => 2,
        Value::Null => 3,
    }
}

/// Total order over cell values.
///
/// Numbers compare by exact numeric value, so an `Int` and a `Float` are
/// equal only when they denote the same number and `-0.0 == 0.0`. Strings
/// compare lexicographically, booleans `false < true`. Across kinds the
/// order is `Bool < number < String < Null`, so missing values sort last.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => unsigned_zero(*x).total_cmp(&unsigned_zero(*y)),
        (Value::Int(x), Value::Float(y)) => compare_int_float(*x, *y),
        (Value::Float(x), Value::Int(y)) => compare_int_float(*y, *x).reverse(),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn unsigned_zero(f: f64) -> f64 {
    if f == 0.0 { 0.0 } else { f }
}

/// Exact comparison of an integer with a float, consistent with
/// `f64::total_cmp` between floats: NaN sorts above every number when
/// positive and below when negative.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    // In range and integral, so the cast is exact
    i.cmp(&(whole as i64))
        .then_with(|| 0.0_f64.total_cmp(&unsigned_zero(f - whole)))
}

/// Compares two rows under one key, ascending.
fn compare_key(a: &Row<'_>, b: &Row<'_>, column: &str) -> Ordering {
    compare_values(a.value(column), b.value(column))
}

/// Sorts rows by the given keys.
///
/// Keys apply in order; later keys break ties of earlier ones and remaining
/// ties fall back to insertion order. A descending key is the exact reverse
/// of the ascending one, tie-break included, so sorting a column ascending
/// and then descending yields exactly the reversed sequence.
pub fn sort_rows(rows: &mut [Row<'_>], keys: &[SortBy]) {
    if keys.is_empty() {
        return;
    }
    rows.sort_by(|a, b| {
        for (i, key) in keys.iter().enumerate() {
            let ordering = compare_key(a, b, &key.column);
            // The last key owns the insertion-order tie-break
            let ordering = if i + 1 == keys.len() {
                ordering.then(a.index.cmp(&b.index))
            } else {
                ordering
            };
            let ordering = if key.desc { ordering.reverse() } else { ordering };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(compare_values(&Value::Int(2), &Value::Float(1.5)), Ordering::Greater);
        assert_eq!(compare_values(&Value::Float(2.0), &Value::Int(2)), Ordering::Equal);
    }

    #[test]
    fn test_large_ints_against_floats_are_exact() {
        let two_53 = 1i64 << 53;
        let (a, b, c) = (Value::Int(two_53), Value::Float(two_53 as f64), Value::Int(two_53 + 1));
        assert_eq!(compare_values(&a, &b), Ordering::Equal);
        assert_eq!(compare_values(&b, &c), Ordering::Less);
        assert_eq!(compare_values(&a, &c), Ordering::Less);

        assert_eq!(
            compare_values(&Value::Int(i64::MAX), &Value::Float(2f64.powi(63))),
            Ordering::Less
        );
        assert_eq!(compare_values(&Value::Int(-3), &Value::Float(-2.5)), Ordering::Less);
        assert_eq!(compare_values(&Value::Int(0), &Value::Float(-0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Float(-0.0), &Value::Float(0.0)), Ordering::Equal);
        assert_eq!(compare_values(&Value::Int(i64::MAX), &Value::Float(f64::NAN)), Ordering::Less);
    }

    #[test]
    fn test_sort_mixed_large_numbers() {
        let two_53 = 1i64 << 53;
        let records: Vec<Record> = (0..200i64)
            .map(|k| {
                let power = match k % 3 {
                    0 => Value::Int(two_53 + k % 7 - 3),
                    1 => Value::Float(two_53 as f64),
                    _ => Value::Float(two_53 as f64 - (k % 5) as f64 - 0.5),
                };
                Record::new().set("Power", power)
            })
            .collect();
        let mut rows: Vec<Row<'_>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Row { index, record })
            .collect();

        sort_rows(&mut rows, &[SortBy::asc("Power")]);
        for pair in rows.windows(2) {
            let ordering = compare_values(pair[0].value("Power"), pair[1].value("Power"));
            assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal {
                assert!(pair[0].index < pair[1].index);
            }
        }

        sort_rows(&mut rows, &[SortBy::desc("Power")]);
        assert_eq!(rows[0].value("Power"), &Value::Int(two_53 + 3));
    }

    #[test]
    fn test_null_sorts_last() {
        assert_eq!(compare_values(&Value::Null, &Value::Int(0)), Ordering::Greater);
        assert_eq!(compare_values(&Value::from("z"), &Value::Null), Ordering::Less);
        assert_eq!(compare_values(&Value::Null, &Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_strings_lexicographic() {
        assert_eq!(
            compare_values(&Value::from("Aurora"), &Value::from("Astaroth")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_secondary_key_breaks_ties() {
        let records = vec![
            Record::new().set("Role", "Tank").set("Power", 5i64),
            Record::new().set("Role", "Mage").set("Power", 7i64),
            Record::new().set("Role", "Tank").set("Power", 9i64),
        ];
        let mut rows: Vec<Row<'_>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Row { index, record })
            .collect();

        sort_rows(&mut rows, &[SortBy::asc("Role"), SortBy::desc("Power")]);
        let order: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
