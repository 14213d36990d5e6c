//! Input module
//! Handles the skill record model, table file detection, loading and caching

pub mod file_detector;
pub mod record;
pub mod loader;
pub mod cache;

pub use cache::TableCache;
pub use record::{Record, SkillCategory};
