//! Filter-and-aggregate engine

pub mod selection;
pub mod filter;
pub mod aggregate;
pub mod matching;
pub mod analyzer;

pub use aggregate::{aggregate_skill_counts, filter_by_min_count, SkillCount};
pub use analyzer::DashboardEngine;
pub use filter::apply_filters;
pub use matching::{candidate_skills, compute_match_score, MatchScore, SkillSelections};
pub use selection::{Dimension, SelectionSet, ALL_SENTINEL};
