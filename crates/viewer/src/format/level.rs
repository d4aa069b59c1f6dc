/// Canonical severity letters used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Severity::Trace => 'T',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Critical => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Severity> {
        match c {
            'T' => Some(Severity::Trace),
            'D' => Some(Severity::Debug),
            'I' => Some(Severity::Info),
            'W' => Some(Severity::Warn),
            'E' => Some(Severity::Error),
            'C' => Some(Severity::Critical),
            _ => None,
        }
    }
}

/// Collapse an arbitrary severity string to a single uppercase letter.
///
/// Known names map to their canonical letter; anything else falls back to
/// the first character of the uppercased input. The fallback is a
/// deliberate pass-through: `"Critical"` → `C`, but an unknown `"Xyz"`
/// also renders as `X`. Absent or empty input defaults to `I`.
pub fn normalize_level(raw: Option<&str>) -> char {
    let Some(raw) = raw else {
        return 'I';
    };
    let upper = raw.to_uppercase();
    match upper.as_str() {
        "" => 'I',
        "INFO" => 'I',
        "WARN" | "WARNING" => 'W',
        "ERROR" | "ERR" => 'E',
        "DEBUG" => 'D',
        "TRACE" => 'T',
        _ => upper.chars().next().unwrap_or('I'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        assert_eq!(normalize_level(Some("Info")), 'I');
        assert_eq!(normalize_level(Some("WARN")), 'W');
        assert_eq!(normalize_level(Some("warning")), 'W');
        assert_eq!(normalize_level(Some("Error")), 'E');
        assert_eq!(normalize_level(Some("err")), 'E');
        assert_eq!(normalize_level(Some("debug")), 'D');
        assert_eq!(normalize_level(Some("TRACE")), 'T');
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_level(Some("warn")), normalize_level(Some("WARN")));
        assert_eq!(normalize_level(Some("Warning")), 'W');
    }

    #[test]
    fn test_first_letter_fallback() {
        assert_eq!(normalize_level(Some("Critical")), 'C');
        assert_eq!(normalize_level(Some("fatal")), 'F');
        assert_eq!(normalize_level(Some("X")), 'X');
    }

    #[test]
    fn test_absent_and_empty_default_to_info() {
        assert_eq!(normalize_level(None), 'I');
        assert_eq!(normalize_level(Some("")), 'I');
    }

    #[test]
    fn test_severity_round_trip() {
        for sev in Severity::ALL {
            assert_eq!(Severity::from_char(sev.as_char()), Some(sev));
        }
        assert_eq!(Severity::from_char('X'), None);
    }
}
