//! Per-action counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe counter collection keyed by static names.
///
/// Names not registered at construction are ignored.
pub struct StatsCounter {
    counters: HashMap<&'static str, AtomicU64>,
}

impl StatsCounter {
    pub fn new(names: &[&'static str]) -> Self {
        let mut counters = HashMap::new();
        for &name in names {
            counters.insert(name, AtomicU64::new(0));
        }
        Self { counters }
    }

    pub fn increment(&self, name: &str) {
        if let Some(counter) = self.counters.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counters
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> HashMap<&'static str, u64> {
        self.counters
            .iter()
            .map(|(&k, v)| (k, v.load(Ordering::Relaxed)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_registered_names_only() {
        let stats = StatsCounter::new(&["fetch_cases", "submit_vote"]);
        stats.increment("fetch_cases");
        stats.increment("fetch_cases");
        stats.increment("unknown");
        assert_eq!(stats.get("fetch_cases"), 2);
        assert_eq!(stats.get("submit_vote"), 0);
        assert_eq!(stats.get("unknown"), 0);
        assert_eq!(stats.snapshot().len(), 2);
    }
}
