//! Hero record

use std::collections::HashMap;

use super::Value;
use crate::error::FieldError;

/// One hero's flat attribute mapping.
///
/// Records hold field values as a `HashMap<String, Value>` keyed by column
/// accessor. Typed getter methods provide checked access; [`Record::value`]
/// gives lenient access for filters and comparators, where an absent field
/// behaves like `Null`.
///
/// # Example
///
/// ```
/// use herowars_lib::model::Record;
///
/// let record = Record::new()
///     .set("Hero", "Aurora")
///     .set("Power", 28_311i64);
///
/// assert_eq!(record.get_string("Hero").unwrap(), Some("Aurora"));
/// assert_eq!(record.get_int("Power").unwrap(), Some(28_311));
/// assert!(record.value("Dodge").is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, or `Null` when the field is absent.
    pub fn value(&self, field: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a float field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets any numeric field value as `f64`.
    pub fn get_number(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "number",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new()
            .set("Hero", "Jet")
            .set("Power", 19_020i64)
            .set("Dodge", 4.5)
            .set("Armor", Value::Null);

        assert_eq!(record.get_string("Hero").unwrap(), Some("Jet"));
        assert_eq!(record.get_int("Power").unwrap(), Some(19_020));
        assert_eq!(record.get_number("Power").unwrap(), Some(19_020.0));
        assert_eq!(record.get_float("Dodge").unwrap(), Some(4.5));
        assert_eq!(record.get_int("Armor").unwrap(), None);
    }

    #[test]
    fn test_missing_field() {
        let record = Record::new();
        let err = record.get_string("Hero").unwrap_err();
        assert!(matches!(err, FieldError::Missing { .. }));
        assert!(record.value("Hero").is_null());
    }

    #[test]
    fn test_type_mismatch() {
        let record = Record::new().set("Hero", "Jet");
        let err = record.get_number("Hero").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'Hero' type mismatch: expected number, got string"
        );
    }
}
