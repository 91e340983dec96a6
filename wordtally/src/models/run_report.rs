// src/models/run_report.rs

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub files_processed: usize,
    pub distinct_words: usize,
    pub excluded_words: usize,
    pub output_dir: PathBuf,
}
