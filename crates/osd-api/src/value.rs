//! Tagged values for dynamically keyed metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A metadata value: string, number, boolean or nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value.
    String(String),
    /// Nested mapping.
    Map(BTreeMap<String, DataValue>),
}

impl DataValue {
    /// Returns the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the number if this is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the mapping if this is nested.
    pub fn as_map(&self) -> Option<&BTreeMap<String, DataValue>> {
        match self {
            DataValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Number(n)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl From<BTreeMap<String, DataValue>> for DataValue {
    fn from(m: BTreeMap<String, DataValue>) -> Self {
        DataValue::Map(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let v = DataValue::from("us-east");
        assert_eq!(v.as_str(), Some("us-east"));
        assert_eq!(v.as_f64(), None);
        assert_eq!(DataValue::from(2.5).as_f64(), Some(2.5));
        assert_eq!(DataValue::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_untagged_json_shape() {
        let mut inner = BTreeMap::new();
        inner.insert("city".to_string(), DataValue::from("Oslo"));
        let v = DataValue::Map(inner);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"city":"Oslo"}"#);

        let parsed: DataValue = serde_json::from_str(r#"{"public":true,"cores":8}"#).unwrap();
        let map = parsed.as_map().unwrap();
        assert_eq!(map.get("public").and_then(DataValue::as_bool), Some(true));
        assert_eq!(map.get("cores").and_then(DataValue::as_f64), Some(8.0));
    }
}
