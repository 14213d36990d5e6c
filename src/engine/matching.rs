//! Skills match score: how much of a job context the user's skills cover

use crate::engine::filter::{any_of, RowPredicate};
use crate::engine::selection::is_unrestricted;
use crate::error::{Result, SkillsDashboardError};
use crate::input::record::{Record, SkillCategory};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Skills the user declares, per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelections {
    selections: BTreeMap<SkillCategory, BTreeSet<String>>,
}

impl SkillSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, category: SkillCategory, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(category, skills);
        self
    }

    pub fn select<I, S>(&mut self, category: SkillCategory, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .entry(category)
            .or_default()
            .extend(skills.into_iter().map(Into::into));
    }

    pub fn get(&self, category: SkillCategory) -> Option<&BTreeSet<String>> {
        self.selections.get(&category)
    }

    /// True when the category counts as fully covered.
    pub fn covers_whole_category(&self, category: SkillCategory) -> bool {
        self.get(category).map_or(true, is_unrestricted)
    }
}

/// Share of context rows covered by the user's skills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Rounded to two decimals.
    pub score: f64,
    pub complement: f64,
    pub matching: usize,
    pub total: usize,
}

impl MatchScore {
    /// Pie slices in display order.
    pub fn slices(&self) -> [(&'static str, f64); 2] {
        [("Matching", self.score), ("Not Matching", self.complement)]
    }

    pub fn percentage(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Distinct skills of one category in the context set, most frequent first.
/// Ties keep first-seen order.
pub fn candidate_skills(context_set: &[&Record], category: SkillCategory) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();

    for record in context_set.iter().filter(|r| category.matches(&r.skill_type)) {
        let entry = frequency.entry(record.skill.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(record.skill.as_str());
        }
        *entry += 1;
    }

    order.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    order.into_iter().map(str::to_string).collect()
}

/// Candidate lists for every category.
pub fn candidate_universe(context_set: &[&Record]) -> Vec<(SkillCategory, Vec<String>)> {
    SkillCategory::ALL
        .iter()
        .map(|category| (*category, candidate_skills(context_set, *category)))
        .collect()
}

/// Mask for one category.
///
/// An unset or "All" selection selects every record of that category, so a
/// user who names no skills in a category is treated as having all of them.
/// Otherwise records whose skill was chosen are selected.
pub fn category_predicate<'a>(
    category: SkillCategory,
    chosen: Option<&'a BTreeSet<String>>,
) -> RowPredicate<'a> {
    match chosen {
        Some(skills) if !is_unrestricted(skills) => {
            Box::new(move |record: &Record| skills.contains(&record.skill))
        }
        _ => Box::new(move |record: &Record| category.matches(&record.skill_type)),
    }
}

/// OR of the four category masks.
pub fn user_skill_predicate(selections: &SkillSelections) -> RowPredicate<'_> {
    any_of(
        SkillCategory::ALL
            .iter()
            .map(|category| category_predicate(*category, selections.get(*category)))
            .collect(),
    )
}

/// Context rows whose skill the user claims to have, in table order.
pub fn user_skill_set<'a>(
    context_set: &[&'a Record],
    selections: &SkillSelections,
) -> Vec<&'a Record> {
    for category in SkillCategory::ALL {
        let mask = category_predicate(category, selections.get(category));
        let selected = context_set.iter().filter(|r| mask(**r)).count();
        debug!("{} skills selected: {}", category.label(), selected);
    }

    let predicate = user_skill_predicate(selections);
    context_set.iter().copied().filter(|r| predicate(*r)).collect()
}

/// `|user_skill_set| / |context_set|` rounded to two decimals.
///
/// `user_skill_set` must come from re-filtering `context_set`.
pub fn compute_match_score<T>(context_set: &[T], user_skill_set: &[T]) -> Result<MatchScore> {
    let total = context_set.len();
    let matching = user_skill_set.len();

    if total == 0 {
        return Err(SkillsDashboardError::EmptyContextSet);
    }
    if matching > total {
        return Err(SkillsDashboardError::InvalidInput(format!(
            "Matching set ({} rows) is larger than its context set ({} rows)",
            matching, total
        )));
    }

    debug!("Match score inputs: {} of {}", matching, total);
    let score = round2(matching as f64 / total as f64);
    Ok(MatchScore {
        score,
        complement: 1.0 - score,
        matching,
        total,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
