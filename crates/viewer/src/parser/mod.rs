/// Log record parsing module
///
/// Converts newline-delimited JSON log text into structured, ordered
/// records that the formatting and filtering layers consume.
///
/// # Safety Guarantees
///
/// Parsing never fails a batch:
/// - Malformed lines degrade to verbatim pass-through
/// - Line size limits (prevent DoS)
/// - Field order of the source object is preserved

pub mod json;
pub mod model;

// Re-export commonly used types
pub use json::{parse_batch, parse_line};
pub use model::{FieldValue, LogRecord, ParsedLine, RESERVED_KEYS};

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
