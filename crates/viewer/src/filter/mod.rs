/// Line filtering module
///
/// Two alternative predicate semantics, selected by configuration:
///
/// - word mode: whitespace-split lowercase words; every include word must
///   appear in the line, any exclude word rejects it
/// - pattern mode: one optional include regex and one optional exclude
///   regex, case-insensitive, compiled with the Ripgrep engine
///
/// Both modes match against the rendered display line, since filter tokens
/// are meant to hit visible content.

pub mod engine;

pub use engine::{FilterError, FilterMode, LineFilter, PatternFilter, WordFilter};
