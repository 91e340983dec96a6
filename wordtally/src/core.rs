// src/core.rs
pub mod aggregator;
pub mod exclusion;
pub mod scanner;
pub mod tokenizer;
pub mod writer;

use crate::config::Settings;
use crate::error::{Result, WordTallyError};
use crate::models::RunReport;
use aggregator::Aggregator;
use scanner::discover_corpus;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::info;
use writer::PartitionedWriter;

/// Counts every corpus file in `dir` and writes the per-letter index and the
/// excluded-words report into `dir/Output`, using `wordtally.toml` from `dir`
/// when present.
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` does not exist or is not a directory
/// * The settings file is unreadable or malformed
/// * A corpus file or the exclusion list cannot be read
/// * The output directory or an output file cannot be written
/// * The configured output directory resolves to `dir` itself
#[inline]
pub fn process_files(dir: &Path) -> Result<RunReport> {
    if !dir.is_dir() {
        return Err(WordTallyError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let settings = Settings::load(dir)?;
    process_files_with(dir, &settings, None)
}

/// Same as [`process_files`] with explicit settings and an optional
/// cancellation flag honoured between files.
///
/// Aggregation finishes on every worker before exclusions are applied, and
/// exclusions are applied before anything is written.
///
/// # Errors
///
/// See [`process_files`]. Also returns [`WordTallyError::Cancelled`] when
/// `cancel` is set during aggregation.
#[inline]
pub fn process_files_with(
    dir: &Path,
    settings: &Settings,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<RunReport> {
    if !dir.is_dir() {
        return Err(WordTallyError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let output_dir = dir.join(&settings.output_dir);
    fs::create_dir_all(&output_dir)
        .map_err(|source| WordTallyError::output_write(&output_dir, source))?;
    // Letter files written into the corpus would be counted on the next run.
    if same_directory(dir, &output_dir)? {
        return Err(WordTallyError::OutputIsCorpus { path: output_dir });
    }

    let files = discover_corpus(dir, settings)?;
    info!(dir = %dir.display(), files = files.len(), "corpus discovered");

    let mut aggregator = Aggregator::new(settings.worker_threads());
    if let Some(flag) = cancel {
        aggregator = aggregator.with_cancel(flag);
    }
    let table = aggregator.aggregate(&files)?;

    let excluded = exclusion::filter(&table, &dir.join(&settings.exclude_file))?;

    let writer =
        PartitionedWriter::new(&output_dir).with_excluded_output(settings.excluded_output.as_str());
    writer.write_words(&table)?;
    writer.write_excluded(&excluded)?;

    info!(
        files = files.len(),
        distinct_words = table.len(),
        excluded_words = excluded.len(),
        "run complete"
    );
    Ok(RunReport {
        files_processed: files.len(),
        distinct_words: table.len(),
        excluded_words: excluded.len(),
        output_dir,
    })
}

fn same_directory(corpus: &Path, output: &Path) -> Result<bool> {
    let corpus =
        fs::canonicalize(corpus).map_err(|source| WordTallyError::file_read(corpus, source))?;
    let output =
        fs::canonicalize(output).map_err(|source| WordTallyError::output_write(output, source))?;
    Ok(corpus == output)
}
