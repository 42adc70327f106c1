use crate::error::BanterError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Severity levels for trace telemetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TraceSeverity {
    Verbose = 0,
    Information = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl fmt::Display for TraceSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSeverity::Verbose => write!(f, "VERBOSE"),
            TraceSeverity::Information => write!(f, "INFORMATION"),
            TraceSeverity::Warning => write!(f, "WARNING"),
            TraceSeverity::Error => write!(f, "ERROR"),
            TraceSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for TraceSeverity {
    type Err = BanterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERBOSE" => Ok(TraceSeverity::Verbose),
            "INFORMATION" => Ok(TraceSeverity::Information),
            "WARNING" => Ok(TraceSeverity::Warning),
            "ERROR" => Ok(TraceSeverity::Error),
            "CRITICAL" => Ok(TraceSeverity::Critical),
            _ => Err(BanterError::Invalid(format!("Invalid trace severity: {}", s))),
        }
    }
}

/// Flexible value type for telemetry event properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<String> for TelemetryValue {
    fn from(s: String) -> Self { TelemetryValue::String(s) }
}

impl From<&str> for TelemetryValue {
    fn from(s: &str) -> Self { TelemetryValue::String(s.to_string()) }
}

impl From<i64> for TelemetryValue {
    fn from(i: i64) -> Self { TelemetryValue::Integer(i) }
}

impl From<i32> for TelemetryValue {
    fn from(i: i32) -> Self { TelemetryValue::Integer(i as i64) }
}

impl From<u64> for TelemetryValue {
    fn from(i: u64) -> Self { TelemetryValue::Integer(i as i64) }
}

impl From<u32> for TelemetryValue {
    fn from(i: u32) -> Self { TelemetryValue::Integer(i as i64) }
}

impl From<f64> for TelemetryValue {
    fn from(f: f64) -> Self { TelemetryValue::Float(f) }
}

impl From<bool> for TelemetryValue {
    fn from(b: bool) -> Self { TelemetryValue::Boolean(b) }
}

impl fmt::Display for TelemetryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryValue::String(s) => write!(f, "{}", s),
            TelemetryValue::Integer(i) => write!(f, "{}", i),
            TelemetryValue::Float(fl) => write!(f, "{}", fl),
            TelemetryValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A single submission accepted by a telemetry backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryItem {
    /// Named application event with structured properties
    Event {
        name: String,
        properties: HashMap<String, TelemetryValue>,
    },
    /// Scalar measurement
    Metric { name: String, value: f64 },
    /// Free-form diagnostic trace
    Trace {
        severity: TraceSeverity,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert!(TraceSeverity::Error > TraceSeverity::Information);
        assert!(TraceSeverity::Critical > TraceSeverity::Error);
        assert_eq!(TraceSeverity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_severity_parsing() {
        assert_eq!("INFORMATION".parse::<TraceSeverity>().unwrap(), TraceSeverity::Information);
        assert_eq!("error".parse::<TraceSeverity>().unwrap(), TraceSeverity::Error);
        assert!("invalid".parse::<TraceSeverity>().is_err());
    }

    #[test]
    fn test_value_conversion() {
        let str_val: TelemetryValue = "test".into();
        let int_val: TelemetryValue = 42i64.into();
        let bool_val: TelemetryValue = true.into();

        assert!(matches!(str_val, TelemetryValue::String(_)));
        assert!(matches!(int_val, TelemetryValue::Integer(42)));
        assert!(matches!(bool_val, TelemetryValue::Boolean(true)));
    }

    #[test]
    fn test_json_serialization() {
        let item = TelemetryItem::Event {
            name: "qna_lookup".to_string(),
            properties: {
                let mut map = HashMap::new();
                map.insert("question".to_string(), "what is banter".into());
                map.insert("answers".to_string(), 1u64.into());
                map
            },
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: TelemetryItem = serde_json::from_str(&json).unwrap();

        match deserialized {
            TelemetryItem::Event { name, properties } => {
                assert_eq!(name, "qna_lookup");
                assert_eq!(properties.len(), 2);
            }
            other => panic!("unexpected item: {:?}", other),
        }
    }
}
