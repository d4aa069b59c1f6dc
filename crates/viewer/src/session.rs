//! Session-scoped cache of loaded sources.
//!
//! Keyed by source identity (file path). Each entry holds the current
//! immutable [`SourceView`] snapshot plus the active filter for that
//! source. Reloads replace the snapshot wholesale and keep the filter;
//! filter swaps and reads against one source go through the entry mutex
//! so a read never pairs a stale snapshot with a half-applied filter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use tracing::{debug, info};

use crate::filter::LineFilter;
use crate::format::Severity;
use crate::highlight::severity_of;
use crate::view::SourceView;

/// One rendered line that passed the active filter, tagged with the
/// severity driving its highlight color (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleLine {
    pub text: String,
    pub severity: Option<Severity>,
}

struct SourceEntry {
    /// `None` until the source is first loaded (a filter may be set first).
    view: Option<Arc<SourceView>>,
    filter: LineFilter,
}

impl SourceEntry {
    fn empty() -> Self {
        Self {
            view: None,
            filter: LineFilter::pass_all(),
        }
    }
}

/// Replace-only view cache shared by the host integration layer.
pub struct ViewCache {
    entries: DashMap<String, Arc<Mutex<SourceEntry>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Parse, measure and render `content`, replacing any previous
    /// snapshot for `source`. The active filter survives a reload.
    pub fn load(&self, source: &str, content: &str) -> Arc<SourceView> {
        let view = Arc::new(SourceView::build(content));
        let entry = self.entry(source);
        let mut guard = lock(&entry);
        guard.view = Some(Arc::clone(&view));
        info!(
            source,
            lines = view.len(),
            records = view.record_count(),
            "loaded source"
        );
        view
    }

    /// Install a new filter for `source`. The filter is already validated
    /// (pattern compilation happens in [`LineFilter`] construction); the
    /// previous filter stays active until this swap completes.
    pub fn set_filter(&self, source: &str, filter: LineFilter) {
        let entry = self.entry(source);
        let mut guard = lock(&entry);
        guard.filter = filter;
        debug!(source, "filter replaced");
    }

    /// Rendered lines that pass the active filter, severity-tagged.
    /// Returns `None` when the source has not been loaded yet.
    pub fn visible(&self, source: &str) -> Option<Vec<VisibleLine>> {
        let entry = Arc::clone(self.entries.get(source)?.value());
        let guard = lock(&entry);
        let view = guard.view.as_ref()?;
        let lines = view
            .rendered
            .iter()
            .filter(|line| guard.filter.should_include(line))
            .map(|line| VisibleLine {
                text: line.clone(),
                severity: severity_of(line),
            })
            .collect();
        Some(lines)
    }

    /// Current snapshot for a source, if loaded.
    pub fn snapshot(&self, source: &str) -> Option<Arc<SourceView>> {
        let entry = Arc::clone(self.entries.get(source)?.value());
        let guard = lock(&entry);
        guard.view.clone()
    }

    /// Drop a source entirely (content changed owners, file deleted, ...).
    pub fn invalidate(&self, source: &str) {
        self.entries.remove(source);
        debug!(source, "entry invalidated");
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate counts across entries.
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();
        for item in self.entries.iter() {
            let guard = lock(item.value());
            stats.sources += 1;
            if let Some(view) = &guard.view {
                stats.loaded_sources += 1;
                stats.total_lines += view.len();
                stats.total_records += view.record_count();
            }
        }
        stats
    }

    fn entry(&self, source: &str) -> Arc<Mutex<SourceEntry>> {
        Arc::clone(
            self.entries
                .entry(source.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(SourceEntry::empty())))
                .value(),
        )
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}

// A poisoned entry only means another reader panicked mid-lock; the data
// itself is replace-only, so recovering the guard is safe.
fn lock(entry: &Arc<Mutex<SourceEntry>>) -> MutexGuard<'_, SourceEntry> {
    entry.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub sources: usize,
    pub loaded_sources: usize,
    pub total_lines: usize,
    pub total_records: usize,
}
