//! Skills dashboard library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod engine;
pub mod output;

pub use error::{Result, SkillsDashboardError};
pub use config::Config;
