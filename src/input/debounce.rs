use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before an edit is applied.
pub const EDIT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces rapid values per key; only the last value pushed for a key is
/// released, once the key has been quiet for the window.
///
/// Time is passed in by the caller, so the debouncer owns no timer.
#[derive(Debug, Clone)]
pub struct Debouncer<K, V> {
    window: Duration,
    pending: BTreeMap<K, (V, Instant)>,
}

impl<K: Ord + Clone, V> Debouncer<K, V> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: BTreeMap::new(),
        }
    }

    /// Record a value for `key`, replacing any pending one and restarting its window.
    pub fn push(&mut self, key: K, value: V, now: Instant) {
        self.pending.insert(key, (value, now));
    }

    /// Remove and return values whose window has elapsed at `now`, in key order.
    pub fn settled(&mut self, now: Instant) -> Vec<(K, V)> {
        let ready: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, (_, at))| now.saturating_duration_since(*at) >= self.window)
            .map(|(k, _)| k.clone())
            .collect();

        ready
            .into_iter()
            .filter_map(|k| self.pending.remove(&k).map(|(v, _)| (k, v)))
            .collect()
    }

    /// Remove and return every pending value regardless of timing.
    pub fn flush(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|(k, (v, _))| (k, v))
            .collect()
    }

    /// Count of keys with a pending value.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K: Ord + Clone, V> Default for Debouncer<K, V> {
    fn default() -> Self {
        Self::new(EDIT_QUIET_WINDOW)
    }
}
