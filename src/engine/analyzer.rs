//! Dashboard engine tying the table cache, filters and aggregations together

use crate::config::Config;
use crate::engine::aggregate::{aggregate_skill_counts, count_range, filter_by_min_count};
use crate::engine::filter::{apply_filters, dimension_options};
use crate::engine::matching::{
    candidate_universe, compute_match_score, user_skill_set, SkillSelections,
};
use crate::engine::selection::{Dimension, SelectionSet};
use crate::error::Result;
use crate::input::cache::TableCache;
use crate::input::loader::{SkillTable, TableLoader};
use crate::output::report::{
    limit_bars, sort_for_display, AppliedFilter, CandidateReport, CategoryCandidates,
    CategorySelection, DimensionOptions, MatchReport, OptionsReport, ReportMetadata,
    SkillChartReport, CATEGORY_DISPLAY_ORDER,
};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Session-level engine: one cached table, recomputed views per request.
pub struct DashboardEngine {
    cache: TableCache,
    data_path: PathBuf,
    default_threshold: usize,
    max_bars: usize,
}

impl DashboardEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let loader = TableLoader::new(config.delimiter_byte()?);
        Ok(Self {
            cache: TableCache::new(loader),
            data_path: config.data.path.clone(),
            default_threshold: config.chart.default_threshold,
            max_bars: config.chart.max_bars,
        })
    }

    /// Point the engine at another table. The cache reloads on next use.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn table(&mut self) -> Result<Arc<SkillTable>> {
        self.cache.get_or_load(&self.data_path)
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// Skill frequency view.
    ///
    /// An explicit `threshold` is used as given. Without one, the configured
    /// default is clamped into the range of observed counts.
    pub fn skill_chart(
        &mut self,
        selections: &SelectionSet,
        threshold: Option<usize>,
    ) -> Result<SkillChartReport> {
        let table = self.table()?;
        let filtered = apply_filters(table.records(), selections);
        let counts = aggregate_skill_counts(filtered.iter().copied());
        let range = count_range(&counts);

        let (requested, applied) = match threshold {
            Some(explicit) => (explicit, explicit),
            None => {
                let default = self.default_threshold;
                let clamped = clamp_threshold(default, range);
                if clamped != default {
                    warn!(
                        "Default threshold {} is outside the observed count range {:?}; using {}",
                        default, range, clamped
                    );
                }
                (default, clamped)
            }
        };

        let mut bars = filter_by_min_count(&counts, applied);
        sort_for_display(&mut bars);
        let bars = limit_bars(bars, self.max_bars);

        info!(
            "Skill chart: {} records after filtering, {} distinct skills, {} above threshold {}",
            filtered.len(),
            counts.len(),
            bars.len(),
            applied
        );

        Ok(SkillChartReport {
            metadata: ReportMetadata::new(table.source().display().to_string(), table.len()),
            filters: AppliedFilter::from_selections(selections),
            filtered_records: filtered.len(),
            distinct_skills: counts.len(),
            threshold: applied,
            requested_threshold: requested,
            count_range: range,
            skills: bars,
            category_order: CATEGORY_DISPLAY_ORDER.to_vec(),
        })
    }

    /// Match score view over a job context (country, employment type, seniority).
    pub fn match_score(
        &mut self,
        context: &SelectionSet,
        skills: &SkillSelections,
    ) -> Result<MatchReport> {
        context.ensure_only(&Dimension::JOB_CONTEXT)?;

        let table = self.table()?;
        let context_set = apply_filters(table.records(), context);
        let matching = user_skill_set(&context_set, skills);
        let score = compute_match_score(&context_set, &matching)?;

        info!(
            "Match score: {} of {} context records ({:.0}%)",
            score.matching,
            score.total,
            score.score * 100.0
        );

        Ok(MatchReport {
            metadata: ReportMetadata::new(table.source().display().to_string(), table.len()),
            filters: AppliedFilter::from_selections(context),
            selected_skills: CategorySelection::from_selections(skills),
            score,
        })
    }

    /// Skills that can be picked in each category within a job context.
    pub fn candidates(&mut self, context: &SelectionSet) -> Result<CandidateReport> {
        context.ensure_only(&Dimension::JOB_CONTEXT)?;

        let table = self.table()?;
        let context_set = apply_filters(table.records(), context);
        let universe = candidate_universe(&context_set);

        let categories = CATEGORY_DISPLAY_ORDER
            .iter()
            .filter_map(|category| {
                universe
                    .iter()
                    .find(|(c, _)| c == category)
                    .map(|(c, skills)| CategoryCandidates {
                        category: *c,
                        skills: skills.clone(),
                    })
            })
            .collect();

        Ok(CandidateReport {
            metadata: ReportMetadata::new(table.source().display().to_string(), table.len()),
            filters: AppliedFilter::from_selections(context),
            context_records: context_set.len(),
            categories,
        })
    }

    /// Widget option lists for the given dimensions (all when empty).
    pub fn options(&mut self, dimensions: &[Dimension]) -> Result<OptionsReport> {
        let table = self.table()?;
        let dimensions = if dimensions.is_empty() {
            Dimension::ALL.to_vec()
        } else {
            dimensions.to_vec()
        };

        let options = dimensions
            .into_iter()
            .map(|dimension| DimensionOptions {
                dimension: dimension.name().to_string(),
                label: dimension.label().to_string(),
                column: dimension.column().to_string(),
                options: dimension_options(table.records(), dimension),
            })
            .collect();

        Ok(OptionsReport {
            metadata: ReportMetadata::new(table.source().display().to_string(), table.len()),
            dimensions: options,
        })
    }
}

/// Clamp a threshold into `[min, max - 1]` of the observed counts.
///
/// Bars need a count strictly above the threshold, so the upper bound keeps
/// the most frequent skill on the chart.
pub fn clamp_threshold(requested: usize, range: Option<(usize, usize)>) -> usize {
    match range {
        Some((min, max)) => {
            let upper = max.saturating_sub(1);
            requested.clamp(min.min(upper), upper)
        }
        None => requested,
    }
}
