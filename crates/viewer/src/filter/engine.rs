use std::sync::atomic::{AtomicU64, Ordering};

use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Which of the two filter semantics a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Word,
    Pattern,
}

#[derive(Debug, Default)]
pub struct FilterStats {
    pub lines_scanned: AtomicU64,
    pub lines_matched: AtomicU64,
}

/// Word-list filter built from free-text include/exclude boxes.
///
/// Matching is a case-insensitive substring test: any exclude word
/// rejects the line; if the include list is non-empty, every include word
/// must be present. An empty include list means no include constraint.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl WordFilter {
    pub fn new(include: &str, exclude: &str) -> Self {
        Self {
            include: split_words(include),
            exclude: split_words(exclude),
        }
    }

    fn passes(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        if self.exclude.iter().any(|word| lower.contains(word)) {
            return false;
        }
        if !self.include.is_empty() && !self.include.iter().all(|word| lower.contains(word)) {
            return false;
        }
        true
    }
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Single-regex filter: one optional include pattern, one optional
/// exclude pattern, both case-insensitive.
///
/// Patterns compile once here; a malformed pattern is a configuration
/// error surfaced to the caller, never a per-line failure.
pub struct PatternFilter {
    include: Option<RegexMatcher>,
    exclude: Option<RegexMatcher>,
}

impl PatternFilter {
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    fn passes(&self, line: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(line.as_bytes()).unwrap_or(false) {
                return false;
            }
        }
        if let Some(include) = &self.include {
            if !include.is_match(line.as_bytes()).unwrap_or(false) {
                return false;
            }
        }
        true
    }
}

/// An empty pattern box means "no constraint", same as an absent one.
fn compile(pattern: Option<&str>) -> Result<Option<RegexMatcher>, FilterError> {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    RegexMatcherBuilder::new()
        .case_insensitive(true)
        .multi_line(false)
        .build(pattern)
        .map(Some)
        .map_err(|e| FilterError::InvalidRegex(e.to_string()))
}

enum FilterRule {
    Words(WordFilter),
    Pattern(PatternFilter),
}

/// The active filter for one source, with scan/match counters in tow.
pub struct LineFilter {
    rule: FilterRule,
    stats: FilterStats,
}

impl LineFilter {
    /// A filter that keeps every line.
    pub fn pass_all() -> Self {
        Self::from_words(WordFilter::default())
    }

    pub fn words(include: &str, exclude: &str) -> Self {
        Self::from_words(WordFilter::new(include, exclude))
    }

    pub fn from_words(filter: WordFilter) -> Self {
        Self {
            rule: FilterRule::Words(filter),
            stats: FilterStats::default(),
        }
    }

    pub fn pattern(include: Option<&str>, exclude: Option<&str>) -> Result<Self, FilterError> {
        Ok(Self::from_pattern(PatternFilter::new(include, exclude)?))
    }

    pub fn from_pattern(filter: PatternFilter) -> Self {
        Self {
            rule: FilterRule::Pattern(filter),
            stats: FilterStats::default(),
        }
    }

    #[inline]
    pub fn should_include(&self, line: &str) -> bool {
        self.stats.lines_scanned.fetch_add(1, Ordering::Relaxed);

        let include = match &self.rule {
            FilterRule::Words(words) => words.passes(line),
            FilterRule::Pattern(pattern) => pattern.passes(line),
        };

        if include {
            self.stats.lines_matched.fetch_add(1, Ordering::Relaxed);
        }

        include
    }

    pub fn stats(&self) -> (u64, u64) {
        (
            self.stats.lines_scanned.load(Ordering::Relaxed),
            self.stats.lines_matched.load(Ordering::Relaxed),
        )
    }
}
