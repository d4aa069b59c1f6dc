use super::model::{FieldValue, LogRecord, ParsedLine};
use super::MAX_LINE_SIZE;

/// Parse one input line.
///
/// A line is a record only if it is a JSON object; anything else (plain
/// text, JSON arrays/scalars, truncated JSON, oversized lines, empty
/// lines) is carried through verbatim. Parsing a batch therefore never
/// fails — degraded lines show up unchanged in the output.
pub fn parse_line(line: &str) -> ParsedLine {
    if line.len() > MAX_LINE_SIZE {
        tracing::warn!(bytes = line.len(), "line exceeds size limit, passing through raw");
        return ParsedLine::Raw(line.to_string());
    }

    let trimmed = line.trim();

    // Quick reject: a record line must look like a JSON object
    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return ParsedLine::Raw(line.to_string());
    }

    match serde_json::from_str::<FieldValue>(trimmed) {
        Ok(FieldValue::Object(fields)) => ParsedLine::Record(LogRecord::from_fields(fields)),
        Ok(_) | Err(_) => ParsedLine::Raw(line.to_string()),
    }
}

/// Parse newline-delimited text into a batch, one entry per input line.
pub fn parse_batch(content: &str) -> Vec<ParsedLine> {
    let lines: Vec<ParsedLine> = content.lines().map(parse_line).collect();
    let records = lines.iter().filter(|l| l.as_record().is_some()).count();
    tracing::debug!(total = lines.len(), records, "parsed batch");
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_record() {
        let parsed = parse_line(r#"{"ModuleName":"Net","Title":"connected"}"#);
        let ParsedLine::Record(record) = parsed else {
            panic!("expected record");
        };
        assert_eq!(record.module, "Net");
        assert_eq!(record.title, "connected");
    }

    #[test]
    fn test_parse_line_malformed_passes_through() {
        assert_eq!(parse_line("not json"), ParsedLine::Raw("not json".to_string()));
        assert_eq!(parse_line("{truncated"), ParsedLine::Raw("{truncated".to_string()));
    }

    #[test]
    fn test_parse_line_non_object_json_passes_through() {
        assert_eq!(parse_line("[1,2]"), ParsedLine::Raw("[1,2]".to_string()));
        assert_eq!(parse_line("42"), ParsedLine::Raw("42".to_string()));
        assert_eq!(parse_line("\"hi\""), ParsedLine::Raw("\"hi\"".to_string()));
    }

    #[test]
    fn test_parse_line_empty() {
        assert_eq!(parse_line(""), ParsedLine::Raw(String::new()));
    }

    #[test]
    fn test_parse_line_surrounding_whitespace() {
        let parsed = parse_line("  {\"Title\":\"t\"}  ");
        assert!(parsed.as_record().is_some());
    }

    #[test]
    fn test_parse_line_oversized_passes_through() {
        let huge = format!("{{\"Title\":\"{}\"}}", "x".repeat(MAX_LINE_SIZE + 16));
        assert!(matches!(parse_line(&huge), ParsedLine::Raw(_)));
    }

    #[test]
    fn test_parse_batch_one_entry_per_line() {
        let content = "{\"ModuleName\":\"A\"}\n\nnot json\n{\"ModuleName\":\"B\"}";
        let batch = parse_batch(content);
        assert_eq!(batch.len(), 4);
        assert!(batch[0].as_record().is_some());
        assert_eq!(batch[1], ParsedLine::Raw(String::new()));
        assert_eq!(batch[2], ParsedLine::Raw("not json".to_string()));
        assert!(batch[3].as_record().is_some());
    }
}
