//! Custom serialization for Record.
//!
//! ## Read Format (Deserialization)
//!
//! A record is a JSON object of scalar fields:
//! - Integral numbers become `Value::Int`, other numbers `Value::Float`
//! - Empty strings become `Value::Null` (the scraper writes `""` for
//!   properties it could not find)
//! - Arrays and objects are rejected
//!
//! ## Write Format (Serialization)
//!
//! Fields serialize as a flat map; `Null` serializes as JSON `null`.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of scalar hero fields")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Record, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut fields = HashMap::with_capacity(map.size_hint().unwrap_or(16));

        while let Some(key) = map.next_key::<String>()? {
            let json: serde_json::Value = map.next_value()?;
            let value = json_value_to_value(json)
                .ok_or_else(|| M::Error::custom(format!("field '{}' is not a scalar", key)))?;
            fields.insert(key, value);
        }

        Ok(Record { fields })
    }
}

/// Converts a serde_json::Value to our Value enum.
///
/// Returns `None` for arrays and objects.
fn json_value_to_value(json: serde_json::Value) -> Option<Value> {
    let value = match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                // as_f64 only fails for arbitrary-precision numbers
                Value::Float(n.as_f64()?)
            }
        }
        serde_json::Value::String(s) if s.is_empty() => Value::Null,
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"Hero": "Astaroth", "Power": 31204, "Dodge": 12.5}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get_string("Hero").unwrap(), Some("Astaroth"));
        assert_eq!(record.get_int("Power").unwrap(), Some(31_204));
        assert_eq!(record.get_float("Dodge").unwrap(), Some(12.5));
    }

    #[test]
    fn test_deserialize_empty_string_is_null() {
        let json = r#"{"Hero": "Astaroth", "ArmorPenetration": ""}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert!(record.contains("ArmorPenetration"));
        assert_eq!(record.get_number("ArmorPenetration").unwrap(), None);
    }

    #[test]
    fn test_deserialize_rejects_nested() {
        let json = r#"{"Hero": "Astaroth", "Skins": ["Default"]}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("Skins"));
    }

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new().set("Hero", "Astaroth").set("Power", 31_204i64);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"Hero\":\"Astaroth\""));
        assert!(json.contains("\"Power\":31204"));
    }
}
