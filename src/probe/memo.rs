//! Compute-once memoization for probe results.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// A process-lifetime table of compute-once cells.
///
/// Each key gets one cell, created lazily and written exactly once; the
/// stored value never changes afterwards. Concurrent first users of a key
/// race for its cell: the winner runs the computation, the losers block
/// until the value lands, and the computation runs at most once per key
/// no matter how many threads arrive.
pub(crate) struct MemoMap<K> {
    cells: Mutex<HashMap<K, Arc<OnceCell<bool>>>>,
}

impl<K: Eq + Hash + Clone> MemoMap<K> {
    pub(crate) fn new() -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// The memoized value for `key`, computing it with `compute` on first
    /// access.
    ///
    /// The map lock is held only long enough to find or create the cell,
    /// so a slow computation for one key never blocks lookups of other
    /// keys.
    pub(crate) fn get_or_compute(&self, key: &K, compute: impl FnOnce() -> bool) -> bool {
        let cell = {
            let mut cells = self.cells.lock().unwrap();
            Arc::clone(cells.entry(key.clone()).or_default())
        };
        *cell.get_or_init(compute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    #[test]
    fn test_computes_once_per_key() {
        let map = MemoMap::new();
        let runs = AtomicUsize::new(0);
        let compute = || {
            runs.fetch_add(1, Ordering::SeqCst);
            true
        };
        assert!(map.get_or_compute(&"a", compute));
        assert!(map.get_or_compute(&"a", compute));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        assert!(map.get_or_compute(&"b", compute));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_use_computes_once() {
        const THREADS: usize = 8;
        let map = MemoMap::new();
        let runs = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        std::thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| {
                    barrier.wait();
                    let value = map.get_or_compute(&42u16, || {
                        runs.fetch_add(1, Ordering::SeqCst);
                        // Widen the race window so losers really do wait.
                        std::thread::sleep(std::time::Duration::from_millis(20));
                        true
                    });
                    assert!(value);
                });
            }
        });

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
