use crate::parser::ParsedLine;

/// Batch-wide maximum column widths for the aligned layout.
///
/// Computed once per load and treated as immutable for that batch's
/// rendering pass. Stale widths against a changed batch misalign every
/// column, so a new batch always gets a fresh pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidthStats {
    pub module: usize,
    pub category: usize,
}

/// Single linear scan over a batch; raw pass-through lines contribute
/// nothing. An empty batch yields zero widths.
pub fn compute_widths(lines: &[ParsedLine]) -> WidthStats {
    let mut stats = WidthStats::default();
    for record in lines.iter().filter_map(|l| l.as_record()) {
        stats.module = stats.module.max(record.module.chars().count());
        stats.category = stats.category.max(record.category.chars().count());
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_batch;

    #[test]
    fn test_widths_from_records() {
        let batch = parse_batch(
            "{\"ModuleName\":\"Net\"}\n{\"ModuleName\":\"DB\",\"Category\":\"X\"}",
        );
        let stats = compute_widths(&batch);
        assert_eq!(stats.module, 3);
        assert_eq!(stats.category, 1);
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(compute_widths(&[]), WidthStats::default());
    }

    #[test]
    fn test_raw_lines_ignored() {
        let batch = parse_batch("not json\n{\"ModuleName\":\"Core\"}\n");
        let stats = compute_widths(&batch);
        assert_eq!(stats.module, 4);
        assert_eq!(stats.category, 0);
    }

    #[test]
    fn test_missing_fields_count_as_empty() {
        let batch = parse_batch("{\"Title\":\"only a title\"}");
        assert_eq!(compute_widths(&batch), WidthStats::default());
    }
}
