// src/models/frequency_table.rs
use dashmap::DashMap;

/// Concurrency-safe word to count mapping shared by every aggregation worker.
///
/// All mutation goes through [`increment`](Self::increment) and
/// [`remove`](Self::remove); each holds a single shard lock for the duration
/// of one key's update and never across I/O.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: DashMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one occurrence of `word`, inserting it with a count of 1 if new.
    #[inline]
    pub fn increment(&self, word: &str) {
        if let Some(mut count) = self.counts.get_mut(word) {
            *count = count.saturating_add(1);
            return;
        }
        // Another worker may have inserted the word since the lookup; `entry`
        // takes the shard write lock so the add is still counted exactly once.
        let mut count = self.counts.entry(word.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).map(|count| *count)
    }

    /// Removes `word` and returns its count at the moment of removal.
    /// An increment that lands after this starts a fresh count.
    #[inline]
    pub fn remove(&self, word: &str) -> Option<u64> {
        self.counts.remove(word).map(|(_, count)| count)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Copies every entry out of the table, sorted by word.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
