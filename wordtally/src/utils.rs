// src/utils.rs
use crate::models::RunReport;

pub fn print_report(report: &RunReport) {
    println!("Files processed: {}", report.files_processed);
    println!("Distinct words:  {}", report.distinct_words);
    println!("Excluded words:  {}", report.excluded_words);
    println!("Output written to {}", report.output_dir.display());
}
