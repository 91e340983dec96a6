// src/models/excluded_table.rs

/// Words pulled out of the frequency table by the exclusion filter, in the
/// order they were removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExcludedTable {
    entries: Vec<(String, u64)>,
}

impl ExcludedTable {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Each word is removed from the frequency table before it gets here, so
    /// a word can only be recorded once per run.
    #[inline]
    pub(crate) fn record(&mut self, word: String, count: u64) {
        self.entries.push((word, count));
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(excluded, _)| excluded == word)
            .map(|&(_, count)| count)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
