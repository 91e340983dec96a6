// src/lib.rs
//! Concurrent, streaming word-frequency index.
//!
//! Every `*.txt` file in a directory (except `exclude.txt`) is read line by line
//! on a worker pool into one shared [`FrequencyTable`]. Words listed in
//! `exclude.txt` are then moved into an [`ExcludedTable`], and the result is
//! written as `Output/FILE_A.txt` .. `Output/FILE_Z.txt` plus
//! `Output/excluded_words.txt`.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
mod utils;

pub use cli::{Args, run};
pub use config::Settings;
pub use crate::core::aggregator::{Aggregator, count_reader};
pub use crate::core::exclusion::filter;
pub use crate::core::scanner::discover_corpus;
pub use crate::core::tokenizer::{SEPARATORS, tokenize};
pub use crate::core::writer::{PartitionedWriter, letter_file_name};
pub use crate::core::{process_files, process_files_with};
pub use error::{Result, WordTallyError};
pub use models::{ExcludedTable, FrequencyTable, RunReport};
