use crate::parser::FieldValue;

/// Recursion guard. serde_json refuses to parse anything deeper than 128
/// levels, so well-formed input can never reach this.
const MAX_DEPTH: usize = 200;

/// Render an arbitrary structured value as a compact display token.
///
/// - scalars print their default textual form (`null`, `true`, `5`, raw string)
/// - arrays join their formatted elements with a single space
/// - an object holding exactly the keys `Type` and `Value` is a tagged
///   wrapper: the tag is metadata and only `Value` is rendered
/// - any other object prints `key[value]` pairs in source order
pub fn format_value(value: &FieldValue) -> String {
    format_at(value, 0)
}

fn format_at(value: &FieldValue, depth: usize) -> String {
    if depth > MAX_DEPTH {
        return String::new();
    }

    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Bool(true) => "true".to_string(),
        FieldValue::Bool(false) => "false".to_string(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::String(s) => s.clone(),
        FieldValue::Array(items) => items
            .iter()
            .map(|item| format_at(item, depth + 1))
            .collect::<Vec<_>>()
            .join(" "),
        FieldValue::Object(fields) => {
            if let Some(inner) = tagged_value(fields) {
                return format_at(inner, depth + 1);
            }
            fields
                .iter()
                .map(|(key, v)| format!("{}[{}]", key, format_at(v, depth + 1)))
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

/// A `{Type, Value}` wrapper requires exactly those two keys, in any order.
fn tagged_value(fields: &[(String, FieldValue)]) -> Option<&FieldValue> {
    if fields.len() != 2 {
        return None;
    }
    let has_type = fields.iter().any(|(k, _)| k == "Type");
    let value = fields.iter().find(|(k, _)| k == "Value").map(|(_, v)| v)?;
    if has_type {
        Some(value)
    } else {
        None
    }
}
