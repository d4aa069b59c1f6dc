//! Per-load snapshot of one log source.

use crate::format::{compute_widths, render_line, WidthStats};
use crate::parser::{parse_batch, ParsedLine};

/// Everything derived from one load of a source: the parsed batch, the
/// batch-wide column widths, and the rendered display lines.
///
/// A snapshot is immutable once built. When the underlying content
/// changes, a fresh snapshot replaces it wholesale; widths are never
/// patched incrementally.
#[derive(Debug, Clone)]
pub struct SourceView {
    pub lines: Vec<ParsedLine>,
    pub widths: WidthStats,
    pub rendered: Vec<String>,
}

impl SourceView {
    pub fn build(content: &str) -> Self {
        let lines = parse_batch(content);
        let widths = compute_widths(&lines);
        let rendered = lines.iter().map(|line| render_line(line, &widths)).collect();
        Self {
            lines,
            widths,
            rendered,
        }
    }

    /// Total line count, pass-through lines included.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// How many lines parsed into structured records.
    pub fn record_count(&self) -> usize {
        self.lines.iter().filter(|l| l.as_record().is_some()).count()
    }
}
