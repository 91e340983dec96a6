// src/core/writer.rs
use crate::error::{Result, WordTallyError};
use crate::models::{ExcludedTable, FrequencyTable};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const ALPHABET_LEN: usize = 26;
pub const DEFAULT_EXCLUDED_OUTPUT: &str = "excluded_words.txt";

/// Output file name for words starting with `letter`, e.g. `FILE_H.txt`.
#[inline]
#[must_use]
pub fn letter_file_name(letter: char) -> String {
    format!("FILE_{}.txt", letter.to_ascii_uppercase())
}

/// Bucket for a word's first character; `None` for anything outside `a..=z`.
fn letter_index(word: &str) -> Option<usize> {
    let first = word.chars().next()?;
    first
        .is_ascii_lowercase()
        .then(|| usize::from(first as u8 - b'a'))
}

/// Writes the per-letter outputs and the excluded-words report into one directory.
#[derive(Debug, Clone)]
pub struct PartitionedWriter {
    output_dir: PathBuf,
    excluded_output: String,
}

impl PartitionedWriter {
    #[inline]
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            excluded_output: String::from(DEFAULT_EXCLUDED_OUTPUT),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_excluded_output(mut self, name: impl Into<String>) -> Self {
        self.excluded_output = name.into();
        self
    }

    /// Creates `FILE_A.txt` through `FILE_Z.txt`, each holding `"<word> <count>"`
    /// lines for the words starting with that letter, sorted by word.
    ///
    /// Every file is created even when empty. Words whose first character is not
    /// `a..=z` (digits, symbols, non-ASCII letters) appear in none of them.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of lines written across all 26 files
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * An output file cannot be created or written; files already written are left in place
    #[inline]
    pub fn write_words(&self, table: &FrequencyTable) -> Result<usize> {
        let snapshot = table.snapshot();
        let mut buckets: [Vec<&(String, u64)>; ALPHABET_LEN] = Default::default();
        let mut unlettered: usize = 0;

        for entry in &snapshot {
            match letter_index(&entry.0).and_then(|index| buckets.get_mut(index)) {
                Some(bucket) => bucket.push(entry),
                None => unlettered = unlettered.saturating_add(1),
            }
        }

        let mut written: usize = 0;
        for (letter, bucket) in ('a'..='z').zip(&buckets) {
            let path = self.output_dir.join(letter_file_name(letter));
            write_entries(&path, bucket.iter().map(|(word, count)| (word.as_str(), *count)))?;
            written = written.saturating_add(bucket.len());
        }

        if unlettered > 0 {
            debug!(words = unlettered, "words without a leading a-z letter not written");
        }
        info!(
            output_dir = %self.output_dir.display(),
            words = written,
            "letter files written"
        );
        Ok(written)
    }

    /// Writes the excluded-words report; an empty table produces an empty file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The report cannot be created or written
    #[inline]
    pub fn write_excluded(&self, excluded: &ExcludedTable) -> Result<()> {
        let path = self.output_dir.join(&self.excluded_output);
        write_entries(&path, excluded.iter())?;
        info!(path = %path.display(), words = excluded.len(), "excluded words written");
        Ok(())
    }
}

fn write_entries<'a>(path: &Path, entries: impl Iterator<Item = (&'a str, u64)>) -> Result<()> {
    let file = File::create(path).map_err(|source| WordTallyError::output_write(path, source))?;
    let mut writer = BufWriter::new(file);

    for (word, count) in entries {
        writeln!(writer, "{word} {count}")
            .map_err(|source| WordTallyError::output_write(path, source))?;
    }

    writer
        .flush()
        .map_err(|source| WordTallyError::output_write(path, source))
}
