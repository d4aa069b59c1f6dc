use chrono::{NaiveDateTime, Timelike};

use super::level::normalize_level;
use super::value::format_value;
use super::width::WidthStats;
use crate::parser::{LogRecord, ParsedLine};

/// Base date-time layouts accepted ahead of the fractional part.
const TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%SZ"];

/// Render one batch entry. Records go through the aligned layout; raw
/// pass-through lines come back unchanged.
pub fn render_line(line: &ParsedLine, widths: &WidthStats) -> String {
    match line {
        ParsedLine::Record(record) => render_record(record, widths),
        ParsedLine::Raw(raw) => raw.clone(),
    }
}

/// Render a record into the aligned single-line form:
///
/// ```text
/// [HH:MM:SS:mmm] [ Module   ] [ Category ][L] Title key[value] ...
/// ```
///
/// Never fails: an unparsable timestamp keeps its raw text, missing
/// fields render empty, and the composed line is trimmed at the edges.
pub fn render_record(record: &LogRecord, widths: &WidthStats) -> String {
    let time = match record.timestamp.as_deref() {
        Some(raw) => reformat_timestamp(raw).unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    };

    let level = normalize_level(record.level.as_deref());

    let params = record
        .extra
        .iter()
        .map(|(key, value)| format!("{}[{}]", key, format_value(value)))
        .collect::<Vec<_>>()
        .join(" ");

    let line = format!(
        "[{}] [ {} ] [ {} ][{}] {} {}",
        time,
        pad_right(&record.module, widths.module),
        pad_right(&record.category, widths.category),
        level,
        record.title,
        params,
    );
    line.trim().to_string()
}

/// Strict-UTC field extraction: split off the fractional part, read the
/// base as a naive date-time, and print wall-clock `HH:MM:SS:mmm`.
/// Returns `None` when the base does not parse (caller keeps the raw text).
fn reformat_timestamp(raw: &str) -> Option<String> {
    let (base, frac) = match raw.split_once('.') {
        Some((base, frac)) => (base, frac),
        None => (raw, ""),
    };

    // Fraction of a second, truncated/right-padded to milliseconds
    let digits: String = frac
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(3)
        .collect();
    let ms = format!("{:0<3}", digits);

    let dt = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(base, fmt).ok())?;

    Some(format!(
        "{:02}:{:02}:{:02}:{}",
        dt.hour(),
        dt.minute(),
        dt.second(),
        ms
    ))
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut padded = String::with_capacity(text.len() + width - len);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width - len));
    padded
}
