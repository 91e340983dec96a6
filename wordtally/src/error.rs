// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the word-tally library.
///
/// A missing exclusion source is deliberately absent from this list: it means
/// "no exclusions" and is handled inside the exclusion filter.
#[derive(Debug, Error)]
pub enum WordTallyError {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to list corpus directory: {}", path.display())]
    CorpusScan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read settings file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings file: {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Output directory must not be the corpus directory: {}", path.display())]
    OutputIsCorpus { path: PathBuf },

    #[error("Invalid corpus pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to start worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Run cancelled")]
    Cancelled,
}

impl WordTallyError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WordTallyError>;
