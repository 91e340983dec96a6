// src/core/exclusion.rs
use crate::error::{Result, WordTallyError};
use crate::models::{ExcludedTable, FrequencyTable};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Moves every word listed in `source` out of `table` and into the returned
/// [`ExcludedTable`], keeping its count.
///
/// The exclusion source holds one word per line. Lines are trimmed and matched
/// exactly; they are not split on separators or lowercased.
///
/// # Arguments
///
/// * `table` - The aggregated counts; must no longer be written by workers
/// * `source` - Path of the exclusion list
///
/// # Returns
///
/// * `Ok(ExcludedTable)` - Removed words with their counts; empty when `source` does not exist
///
/// # Errors
///
/// This function may return an error if:
/// * The exclusion file exists but cannot be opened or read
#[inline]
pub fn filter(table: &FrequencyTable, source: &Path) -> Result<ExcludedTable> {
    if !source.is_file() {
        warn!(path = %source.display(), "no exclusion list found, nothing excluded");
        return Ok(ExcludedTable::new());
    }

    let file = File::open(source).map_err(|err| WordTallyError::file_read(source, err))?;
    let excluded = filter_reader(table, BufReader::new(file))
        .map_err(|err| WordTallyError::file_read(source, err))?;

    info!(
        path = %source.display(),
        excluded_words = excluded.len(),
        "exclusion list applied"
    );
    Ok(excluded)
}

/// Streaming core of [`filter`], usable with any line source.
///
/// # Errors
///
/// Returns the underlying I/O error from `reader`.
#[inline]
pub fn filter_reader<R: BufRead>(table: &FrequencyTable, mut reader: R) -> io::Result<ExcludedTable> {
    let mut excluded = ExcludedTable::new();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&line);
        let word = decoded.trim();
        if word.is_empty() {
            continue;
        }
        // Repeated lines find nothing left to remove.
        if let Some(count) = table.remove(word) {
            excluded.record(word.to_owned(), count);
        }
    }

    Ok(excluded)
}
