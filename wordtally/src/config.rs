// src/config.rs
use crate::error::{Result, WordTallyError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "wordtally.toml";

/// Per-corpus settings, read from an optional `wordtally.toml` next to the corpus files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Glob matched against file names directly inside the corpus directory.
    pub corpus_pattern: String,
    /// Reserved file name holding the exclusion list; never part of the corpus.
    pub exclude_file: String,
    /// Output subdirectory, created under the corpus directory.
    pub output_dir: String,
    /// Name of the excluded-words report inside the output directory.
    pub excluded_output: String,
    /// Worker count. `None` or `0` uses one worker per available core.
    pub threads: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corpus_pattern: String::from("*.txt"),
            exclude_file: String::from("exclude.txt"),
            output_dir: String::from("Output"),
            excluded_output: String::from("excluded_words.txt"),
            threads: None,
        }
    }
}

impl Settings {
    /// Loads settings from `dir/wordtally.toml`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The settings file exists but cannot be read
    /// * The settings file is not valid TOML or has unknown keys
    #[inline]
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| WordTallyError::ConfigRead {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| WordTallyError::Config { path, source })
    }

    /// Worker count to hand to the pool builder; `0` lets rayon pick.
    #[inline]
    #[must_use]
    pub fn worker_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
