//! Severity highlighting over rendered lines.
//!
//! A rendered line is tagged with the severity of the first `[L]` marker
//! it carries, with `L` one of the six canonical letters. The tag drives
//! background-color lookup in the display layer; the core only resolves
//! letter → color string.

use crate::config::ColorConfig;
use crate::format::Severity;

/// Find the first `[L]` severity marker in a rendered line.
///
/// Only the six canonical letters count; the timestamp and the padded
/// module/category brackets can never produce a false hit because their
/// content is either wider than one character or not an uppercase letter.
pub fn severity_of(line: &str) -> Option<Severity> {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(2) {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            if let Some(severity) = Severity::from_char(bytes[i + 1] as char) {
                return Some(severity);
            }
        }
    }
    None
}

/// Per-severity background colors, resolved once from configuration and
/// reused across renders.
#[derive(Debug, Clone)]
pub struct ColorTable {
    colors: [String; 6],
}

impl ColorTable {
    pub fn new(config: &ColorConfig) -> Self {
        Self {
            colors: [
                config.trace.clone(),
                config.debug.clone(),
                config.info.clone(),
                config.warn.clone(),
                config.error.clone(),
                config.critical.clone(),
            ],
        }
    }

    pub fn color(&self, severity: Severity) -> &str {
        &self.colors[severity as usize]
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::new(&ColorConfig::default())
    }
}
