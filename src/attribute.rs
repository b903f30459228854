// Typed attribute introspection for hotel records
use serde::Serialize;
use std::fmt;

// Runtime type of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Integer,
    Boolean,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl AttributeValue {
    pub fn value_type(&self) -> AttributeType {
        match self {
            AttributeValue::Integer(_) => AttributeType::Integer,
            AttributeValue::Boolean(_) => AttributeType::Boolean,
            AttributeValue::Text(_) => AttributeType::Text,
        }
    }

    // Booleans also count as integers; querying for `Integer` returns flags too
    pub fn is_type(&self, attribute_type: AttributeType) -> bool {
        match (self, attribute_type) {
            (AttributeValue::Boolean(_), AttributeType::Integer) => true,
            _ => self.value_type() == attribute_type,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(value) => write!(f, "{}", value),
            AttributeValue::Boolean(value) => write!(f, "{}", value),
            AttributeValue::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<u8> for AttributeValue {
    fn from(value: u8) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Text(value.clone())
    }
}

/// Lists a record's public fields as `(name, value)` pairs, in declaration order.
pub trait Attributes {
    fn attributes(&self) -> Vec<(&'static str, AttributeValue)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AttributeValue::Integer(3), AttributeType::Integer ; "integer")]
    #[test_case(AttributeValue::Boolean(true), AttributeType::Boolean ; "boolean")]
    #[test_case(AttributeValue::Text("Coast".to_string()), AttributeType::Text ; "text")]
    fn test_value_type(value: AttributeValue, expected: AttributeType) {
        assert_eq!(value.value_type(), expected);
        assert!(value.is_type(expected));
    }

    #[test]
    fn test_boolean_counts_as_integer() {
        assert!(AttributeValue::Boolean(true).is_type(AttributeType::Integer));
        assert!(!AttributeValue::Integer(1).is_type(AttributeType::Boolean));
        assert!(!AttributeValue::Text("1".to_string()).is_type(AttributeType::Integer));
    }

    #[test]
    fn test_display() {
        assert_eq!(AttributeValue::from(42u32).to_string(), "42");
        assert_eq!(AttributeValue::from(false).to_string(), "false");
        assert_eq!(AttributeValue::from("CityA").to_string(), "\"CityA\"");
    }
}
