// src/models.rs
pub mod excluded_table;
pub mod frequency_table;
pub mod run_report;

pub use excluded_table::ExcludedTable;
pub use frequency_table::FrequencyTable;
pub use run_report::RunReport;
