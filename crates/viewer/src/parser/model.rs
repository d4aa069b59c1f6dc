use std::fmt;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// Fields that are lifted out of the source object into [`LogRecord`].
/// Matching is exact and case-sensitive; `"date"` or `"logLevel"` stay
/// in `extra` like any other field.
pub const RESERVED_KEYS: [&str; 5] = ["Date", "ModuleName", "Category", "LogLevel", "Title"];

/// An arbitrary JSON value with source key order preserved.
///
/// `serde_json::Value` keeps object members in a sorted map, which would
/// scramble the extra-field order in the rendered line. This variant stores
/// objects as an ordered `Vec` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<FieldValue>),
    Object(Vec<(String, FieldValue)>),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<FieldValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::Number(v.into()))
            }

            fn visit_u64<E>(self, v: u64) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::Number(v.into()))
            }

            fn visit_f64<E>(self, v: f64) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                // Non-finite numbers cannot come out of a JSON document
                Ok(serde_json::Number::from_f64(v)
                    .map(FieldValue::Number)
                    .unwrap_or(FieldValue::Null))
            }

            fn visit_str<E>(self, v: &str) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::String(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::String(v))
            }

            fn visit_unit<E>(self) -> Result<FieldValue, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldValue::Null)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<FieldValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(FieldValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<FieldValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, FieldValue>()? {
                    fields.push((key, value));
                }
                Ok(FieldValue::Object(fields))
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// One structured log entry, parsed from a single JSON line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecord {
    /// Raw `Date` value as it appeared in the source (not yet reformatted).
    pub timestamp: Option<String>,
    pub module: String,
    pub category: String,
    /// Raw `LogLevel` value ("Info", "WARN", "Err", single letter, ...).
    pub level: Option<String>,
    pub title: String,
    /// Every non-reserved field, in source order.
    pub extra: Vec<(String, FieldValue)>,
}

impl LogRecord {
    /// Split an ordered field list into the five reserved fields + extras.
    ///
    /// A repeated reserved key overwrites the previous value (JSON
    /// last-one-wins); repeated non-reserved keys are all kept, in order.
    pub fn from_fields(fields: Vec<(String, FieldValue)>) -> Self {
        let mut record = LogRecord::default();
        for (key, value) in fields {
            match key.as_str() {
                "Date" => record.timestamp = scalar_text(&value),
                "ModuleName" => record.module = scalar_text(&value).unwrap_or_default(),
                "Category" => record.category = scalar_text(&value).unwrap_or_default(),
                "LogLevel" => record.level = scalar_text(&value),
                "Title" => record.title = scalar_text(&value).unwrap_or_default(),
                _ => record.extra.push((key, value)),
            }
        }
        record
    }
}

/// Scalar values coerce to their textual form; null and composites do not.
fn scalar_text(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::String(s) => Some(s.clone()),
        FieldValue::Number(n) => Some(n.to_string()),
        FieldValue::Bool(true) => Some("true".to_string()),
        FieldValue::Bool(false) => Some("false".to_string()),
        _ => None,
    }
}

/// Outcome of parsing one input line.
///
/// Lines that are not a JSON object (including empty lines) are carried
/// through verbatim so the output always has one line per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Record(LogRecord),
    Raw(String),
}

impl ParsedLine {
    pub fn as_record(&self) -> Option<&LogRecord> {
        match self {
            ParsedLine::Record(record) => Some(record),
            ParsedLine::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> FieldValue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_field_value_preserves_key_order() {
        let value = parse(r#"{"zeta":1,"alpha":2,"mid":3}"#);
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_field_value_scalars() {
        assert_eq!(parse("null"), FieldValue::Null);
        assert_eq!(parse("true"), FieldValue::Bool(true));
        assert_eq!(parse("\"hi\""), FieldValue::String("hi".to_string()));
        assert_eq!(parse("5"), FieldValue::Number(5.into()));
    }

    #[test]
    fn test_field_value_nested() {
        let value = parse(r#"{"a":[1,{"b":null}]}"#);
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        assert_eq!(fields.len(), 1);
        assert!(matches!(fields[0].1, FieldValue::Array(_)));
    }

    #[test]
    fn test_from_fields_reserved_split() {
        let value = parse(
            r#"{"Date":"2024-01-02 10:20:30.123","ModuleName":"Net","Category":"IO","LogLevel":"Warn","Title":"boom","Pid":42}"#,
        );
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        let record = LogRecord::from_fields(fields);
        assert_eq!(record.timestamp.as_deref(), Some("2024-01-02 10:20:30.123"));
        assert_eq!(record.module, "Net");
        assert_eq!(record.category, "IO");
        assert_eq!(record.level.as_deref(), Some("Warn"));
        assert_eq!(record.title, "boom");
        assert_eq!(record.extra.len(), 1);
        assert_eq!(record.extra[0].0, "Pid");
    }

    #[test]
    fn test_from_fields_reserved_is_case_sensitive() {
        let value = parse(r#"{"date":"x","logLevel":"y","ModuleName":"M"}"#);
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        let record = LogRecord::from_fields(fields);
        assert_eq!(record.module, "M");
        assert!(record.timestamp.is_none());
        // Lowercase variants are ordinary extra fields
        let keys: Vec<&str> = record.extra.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["date", "logLevel"]);
    }

    #[test]
    fn test_from_fields_null_reserved_excluded_from_extra() {
        let value = parse(r#"{"Title":null,"Category":null,"k":null}"#);
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        let record = LogRecord::from_fields(fields);
        assert_eq!(record.title, "");
        assert_eq!(record.category, "");
        assert_eq!(record.extra.len(), 1);
        assert_eq!(record.extra[0].0, "k");
    }

    #[test]
    fn test_from_fields_extra_order_non_alphabetical() {
        let value = parse(r#"{"Zed":1,"Alpha":2,"Title":"t","Mike":3}"#);
        let FieldValue::Object(fields) = value else {
            panic!("expected object");
        };
        let record = LogRecord::from_fields(fields);
        let keys: Vec<&str> = record.extra.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Zed", "Alpha", "Mike"]);
    }

    #[test]
    fn test_reserved_keys_never_reach_extra() {
        let fields: Vec<(String, FieldValue)> = RESERVED_KEYS
            .iter()
            .map(|k| (k.to_string(), FieldValue::String("x".to_string())))
            .collect();
        let record = LogRecord::from_fields(fields);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_scalar_text_coercion() {
        assert_eq!(scalar_text(&FieldValue::Number(7.into())), Some("7".to_string()));
        assert_eq!(scalar_text(&FieldValue::Bool(false)), Some("false".to_string()));
        assert_eq!(scalar_text(&FieldValue::Null), None);
        assert_eq!(scalar_text(&FieldValue::Array(vec![])), None);
    }
}
