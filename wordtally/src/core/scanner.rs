// src/core/scanner.rs
use crate::config::Settings;
use crate::error::{Result, WordTallyError};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[cfg(test)]
pub mod test_utils;

/// Lists the corpus files directly inside `dir`.
///
/// # Arguments
///
/// * `dir` - The corpus directory; subdirectories are never entered
/// * `settings` - Supplies the file-name pattern and the reserved exclusion file name
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Matching files sorted by path, without the exclusion file
///
/// # Errors
///
/// This function may return an error if:
/// * The corpus pattern is not a valid glob
/// * The directory cannot be listed
#[inline]
pub fn discover_corpus(dir: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(&settings.corpus_pattern).map_err(|source| WordTallyError::InvalidPattern {
            pattern: settings.corpus_pattern.clone(),
            source,
        })?;

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|source| WordTallyError::CorpusScan {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if name == settings.exclude_file || !pattern.matches(name) {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    Ok(files)
}
