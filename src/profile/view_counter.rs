//! Approximate page view counter.
//!
//! Counts "sessions" against client-local persisted state only: a run
//! increments the counter unless the last recorded visit was within the
//! past hour. There is no server authority; collisions across machines
//! and racing processes are expected and acceptable.

use crate::store::{KvStore, KEY_LAST_VISIT, KEY_PAGE_VIEWS};
use chrono::{DateTime, Utc};

/// Visits closer together than this count as one session.
pub const SESSION_WINDOW_MS: i64 = 60 * 60 * 1000;

/// The view counter, holding the value read (and possibly bumped) at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCounter {
    count: u64,
}

impl ViewCounter {
    /// Read the persisted count, incrementing it when this run starts a
    /// new session.
    ///
    /// Malformed persisted values parse as absent: a bad counter restarts
    /// from zero, a bad timestamp counts as a new session.
    pub fn initialize(store: &mut dyn KvStore, now: DateTime<Utc>) -> Self {
        let mut count: u64 = store
            .get(KEY_PAGE_VIEWS)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let last_visit_ms: Option<i64> = store.get(KEY_LAST_VISIT).and_then(|v| v.parse().ok());

        let new_session = match last_visit_ms {
            Some(ms) => now.timestamp_millis() - ms > SESSION_WINDOW_MS,
            None => true,
        };

        if new_session {
            count += 1;
            store.set(KEY_PAGE_VIEWS, &count.to_string());
            store.set(KEY_LAST_VISIT, &now.timestamp_millis().to_string());
            tracing::debug!(count, "view counter incremented");
        }

        Self { count }
    }

    /// The raw count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The count formatted for the profile card, e.g. `"1.2K views"`
    /// without the suffix.
    pub fn display(&self) -> String {
        format_views(self.count)
    }
}

/// Abbreviate large counts: `>= 1M` as `N.nM`, `>= 1K` as `N.nK`.
pub fn format_views(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_first_visit_counts_one() {
        let mut store = MemoryStore::new();
        let counter = ViewCounter::initialize(&mut store, at(1_000_000));
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.display(), "1");
    }

    #[test]
    fn test_revisit_within_hour_does_not_count() {
        let mut store = MemoryStore::new();
        ViewCounter::initialize(&mut store, at(1_000_000));
        let counter = ViewCounter::initialize(&mut store, at(1_000_000 + 1800));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_revisit_at_exactly_one_hour_does_not_count() {
        // The window is "more than an hour", not "at least".
        let mut store = MemoryStore::new();
        ViewCounter::initialize(&mut store, at(1_000_000));
        let counter = ViewCounter::initialize(&mut store, at(1_000_000 + 3600));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_revisit_after_hour_counts() {
        let mut store = MemoryStore::new();
        ViewCounter::initialize(&mut store, at(1_000_000));
        let counter = ViewCounter::initialize(&mut store, at(1_000_000 + 3601));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_malformed_count_restarts_from_zero() {
        let mut store = MemoryStore::new();
        store.set(KEY_PAGE_VIEWS, "many");
        let counter = ViewCounter::initialize(&mut store, at(1_000_000));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn test_malformed_timestamp_counts_as_new_session() {
        let mut store = MemoryStore::new();
        store.set(KEY_PAGE_VIEWS, "7");
        store.set(KEY_LAST_VISIT, "yesterday");
        let counter = ViewCounter::initialize(&mut store, at(1_000_000));
        assert_eq!(counter.count(), 8);
    }

    #[test]
    fn test_format_views_boundaries() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_000), "1.0K");
        assert_eq!(format_views(1_234), "1.2K");
        assert_eq!(format_views(999_999), "1000.0K");
        assert_eq!(format_views(1_000_000), "1.0M");
        assert_eq!(format_views(2_500_000), "2.5M");
    }
}
