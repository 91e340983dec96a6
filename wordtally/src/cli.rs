// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, BufRead as _, Write as _};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::core::process_files_with;
use crate::error::WordTallyError;
use crate::models::RunReport;
use crate::utils::print_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the .txt files to count (prompted for when omitted)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Number of worker threads (defaults to one per core)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runs one counting pass for the directory in `args`, asking on stdin when
/// none was given.
///
/// A missing directory is reported on stdout and is not treated as a failure.
///
/// # Errors
///
/// This function may return an error if:
/// * Reading the prompt answer from stdin fails
/// * The settings file, a corpus file or the exclusion list cannot be read
/// * The output cannot be written
pub fn run(args: Args) -> Result<()> {
    let directory = match args.directory {
        Some(directory) => directory,
        None => match prompt_for_directory()? {
            Some(directory) => directory,
            None => {
                println!("Directory not found.");
                return Ok(());
            }
        },
    };

    println!("Processing directory '{}'...", directory.display());

    match execute(&directory, args.threads) {
        Ok(report) => print_report(&report),
        Err(WordTallyError::DirectoryNotFound { .. }) => println!("Directory not found."),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to process directory: {}", directory.display())
            });
        }
    }

    Ok(())
}

fn execute(directory: &Path, threads: Option<usize>) -> Result<RunReport, WordTallyError> {
    if !directory.is_dir() {
        return Err(WordTallyError::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    let mut settings = Settings::load(directory)?;
    if threads.is_some() {
        settings.threads = threads;
    }
    process_files_with(directory, &settings, None)
}

fn prompt_for_directory() -> Result<Option<PathBuf>> {
    println!(
        "Enter directory path. Must be the full path of the directory. Output files will be available in a folder called 'Output' in the directory."
    );
    println!("For example: /home/john/Documents/WordTally/Files");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read directory path from stdin")?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}
