//! Report structures consumed by the formatters

use crate::engine::aggregate::SkillCount;
use crate::engine::matching::{MatchScore, SkillSelections};
use crate::engine::selection::{is_unrestricted, SelectionSet};
use crate::input::record::SkillCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category order used by every chart legend and candidate listing.
pub const CATEGORY_DISPLAY_ORDER: [SkillCategory; 4] = [
    SkillCategory::Technical,
    SkillCategory::Technology,
    SkillCategory::Business,
    SkillCategory::Soft,
];

/// Any report the dashboard can render
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    SkillChart(SkillChartReport),
    Match(MatchReport),
    Candidates(CandidateReport),
    Options(OptionsReport),
}

impl Report {
    /// Base name for files this report is saved to.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Report::SkillChart(_) => "skill_chart",
            Report::Match(_) => "skills_match",
            Report::Candidates(_) => "skill_candidates",
            Report::Options(_) => "filter_options",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub total_records: usize,
    pub dashboard_version: String,
}

impl ReportMetadata {
    pub fn new(source: impl Into<String>, total_records: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            total_records,
            dashboard_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A restricted dimension, as shown next to a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub dimension: String,
    pub label: String,
    pub values: Vec<String>,
}

impl AppliedFilter {
    /// Restricted dimensions of a selection set; unrestricted ones are omitted.
    pub fn from_selections(selections: &SelectionSet) -> Vec<AppliedFilter> {
        selections
            .iter()
            .filter(|(_, values)| !is_unrestricted(values))
            .map(|(dimension, values)| AppliedFilter {
                dimension: dimension.name().to_string(),
                label: dimension.label().to_string(),
                values: values.iter().cloned().collect(),
            })
            .collect()
    }
}

/// Skill frequency bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillChartReport {
    pub metadata: ReportMetadata,
    pub filters: Vec<AppliedFilter>,
    pub filtered_records: usize,
    pub distinct_skills: usize,
    /// Threshold actually applied after clamping.
    pub threshold: usize,
    pub requested_threshold: usize,
    /// Smallest and largest skill count before thresholding.
    pub count_range: Option<(usize, usize)>,
    /// Bars in display order: ascending count.
    pub skills: Vec<SkillCount>,
    pub category_order: Vec<SkillCategory>,
}

impl SkillChartReport {
    pub fn max_count(&self) -> usize {
        self.skills.iter().map(|s| s.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub category: SkillCategory,
    pub skills: Vec<String>,
    /// No skills named, so the whole category counts as covered.
    pub whole_category: bool,
}

impl CategorySelection {
    pub fn from_selections(selections: &SkillSelections) -> Vec<CategorySelection> {
        CATEGORY_DISPLAY_ORDER
            .iter()
            .map(|category| CategorySelection {
                category: *category,
                skills: selections
                    .get(*category)
                    .map(|s| s.iter().cloned().collect())
                    .unwrap_or_default(),
                whole_category: selections.covers_whole_category(*category),
            })
            .collect()
    }
}

/// Skills match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub metadata: ReportMetadata,
    pub filters: Vec<AppliedFilter>,
    pub selected_skills: Vec<CategorySelection>,
    pub score: MatchScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCandidates {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

/// Skills available to pick from, per category, within a job context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReport {
    pub metadata: ReportMetadata,
    pub filters: Vec<AppliedFilter>,
    pub context_records: usize,
    pub categories: Vec<CategoryCandidates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionOptions {
    pub dimension: String,
    pub label: String,
    /// Table column the values come from.
    pub column: String,
    /// "All" first, then the distinct values in table order.
    pub options: Vec<String>,
}

/// Selection widget contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsReport {
    pub metadata: ReportMetadata,
    pub dimensions: Vec<DimensionOptions>,
}

/// Stable sort by ascending count; equal counts keep their incoming order.
pub fn sort_for_display(counts: &mut [SkillCount]) {
    counts.sort_by_key(|c| c.count);
}

/// Keep the `max_bars` most frequent entries of a display-sorted list.
pub fn limit_bars(counts: Vec<SkillCount>, max_bars: usize) -> Vec<SkillCount> {
    if max_bars == 0 || counts.len() <= max_bars {
        return counts;
    }
    let skip = counts.len() - max_bars;
    counts.into_iter().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::selection::Dimension;

    fn count(skill: &str, count: usize) -> SkillCount {
        SkillCount {
            skill: skill.to_string(),
            count,
            skill_type: "TECHNOLOGY".to_string(),
        }
    }

    #[test]
    fn test_display_sort_is_stable() {
        let mut counts = vec![count("Python", 2), count("SQL", 1), count("Communication", 1)];
        sort_for_display(&mut counts);

        let skills: Vec<&str> = counts.iter().map(|c| c.skill.as_str()).collect();
        assert_eq!(skills, vec!["SQL", "Communication", "Python"]);
    }

    #[test]
    fn test_limit_bars_keeps_most_frequent() {
        let counts = vec![count("A", 1), count("B", 2), count("C", 3)];
        let limited = limit_bars(counts.clone(), 2);
        assert_eq!(limited, vec![count("B", 2), count("C", 3)]);
        assert_eq!(limit_bars(counts.clone(), 0), counts);
    }

    #[test]
    fn test_applied_filters_skip_unrestricted() {
        let selections = SelectionSet::new()
            .with(Dimension::Country, ["Germany"])
            .with(Dimension::SeniorityLevel, ["All"])
            .with(Dimension::Company, Vec::<String>::new());

        let filters = AppliedFilter::from_selections(&selections);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].dimension, "country");
        assert_eq!(filters[0].values, vec!["Germany"]);
    }

    #[test]
    fn test_category_selection_flags_whole_categories() {
        let selections = SkillSelections::new().with(SkillCategory::Technology, ["Python"]);
        let summary = CategorySelection::from_selections(&selections);

        assert_eq!(summary.len(), 4);
        assert_eq!(summary[1].category, SkillCategory::Technology);
        assert!(!summary[1].whole_category);
        assert!(summary[0].whole_category);
    }
}
