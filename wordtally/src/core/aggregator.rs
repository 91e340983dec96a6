// src/core/aggregator.rs
use crate::core::tokenizer::tokenize;
use crate::error::{Result, WordTallyError};
use crate::models::FrequencyTable;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Streams a set of files into a shared [`FrequencyTable`] on a bounded worker pool.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    threads: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Aggregator {
    /// `threads == 0` sizes the pool to the available cores.
    #[inline]
    #[must_use]
    pub const fn new(threads: usize) -> Self {
        Self {
            threads,
            cancel: None,
        }
    }

    /// Workers check `flag` before opening each file and stop the run once it is set.
    #[inline]
    #[must_use]
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Counts every word in `files`. Returns only after all workers have finished.
    ///
    /// # Arguments
    ///
    /// * `files` - Paths to read; order does not affect the result
    ///
    /// # Returns
    ///
    /// * `Ok(FrequencyTable)` - Counts for every word in every file
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The worker pool cannot be started
    /// * Any file cannot be opened or read (the whole run fails)
    /// * The cancellation flag is set before every file has been opened
    #[inline]
    pub fn aggregate(&self, files: &[PathBuf]) -> Result<FrequencyTable> {
        let table = FrequencyTable::new();
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|index| format!("wordtally-worker-{index}"))
            .build()?;

        pool.install(|| {
            files
                .par_iter()
                .try_for_each(|path| self.count_file(path, &table))
        })?;

        info!(
            files = files.len(),
            workers = pool.current_num_threads(),
            distinct_words = table.len(),
            "aggregation finished"
        );
        Ok(table)
    }

    fn count_file(&self, path: &Path, table: &FrequencyTable) -> Result<()> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(WordTallyError::Cancelled);
        }

        let file = File::open(path).map_err(|source| WordTallyError::file_read(path, source))?;
        let tokens = count_reader(BufReader::new(file), table)
            .map_err(|source| WordTallyError::file_read(path, source))?;

        debug!(path = %path.display(), tokens, "counted file");
        Ok(())
    }
}

/// Reads `reader` one line at a time, adding each word to `table`.
/// Returns the number of words seen.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` and counting
/// carries on.
///
/// # Errors
///
/// Returns the underlying I/O error.
#[inline]
pub fn count_reader<R: BufRead>(mut reader: R, table: &FrequencyTable) -> io::Result<u64> {
    let mut line: Vec<u8> = Vec::new();
    let mut tokens: u64 = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for word in tokenize(&String::from_utf8_lossy(&line)) {
            table.increment(&word);
            tokens = tokens.saturating_add(1);
        }
    }

    Ok(tokens)
}
