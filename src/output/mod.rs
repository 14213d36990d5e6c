//! Output module
//! Report structures and the formatters that render them

pub mod report;
pub mod formatter;

pub use formatter::{
    resolve_save_path, save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator,
};
pub use report::Report;
