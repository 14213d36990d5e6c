//! Error handling for the skills dashboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillsDashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Missing required column(s): {0}")]
    MissingColumn(String),

    #[error("Cannot compute a match score: the job-context selection matched no records")]
    EmptyContextSet,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillsDashboardError>;

impl From<askama::Error> for SkillsDashboardError {
    fn from(err: askama::Error) -> Self {
        SkillsDashboardError::OutputFormatting(err.to_string())
    }
}
