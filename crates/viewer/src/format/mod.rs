/// Record formatting module
///
/// Renders parsed records into the aligned single-line display form:
///
/// ```text
/// [HH:MM:SS:mmm] [ Module   ] [ Category ][L] Title key[value] ...
/// ```
///
/// Column widths come from a batch-wide [`width::WidthStats`] pass so the
/// level bracket starts at the same column on every line.

pub mod level;
pub mod record;
pub mod value;
pub mod width;

// Re-export commonly used types
pub use level::{normalize_level, Severity};
pub use record::{render_line, render_record};
pub use value::format_value;
pub use width::{compute_widths, WidthStats};
