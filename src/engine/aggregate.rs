//! Skill frequency aggregation

use crate::input::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrences of one skill in a filtered record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
    /// `Type` of the first record seen for this skill. Records sharing a skill
    /// are assumed to share a type; this is not checked.
    #[serde(rename = "type")]
    pub skill_type: String,
}

/// Group records by skill and count them.
///
/// Output is in first-seen order of each skill, so equal inputs always give
/// equal outputs.
pub fn aggregate_skill_counts<'a, I>(records: I) -> Vec<SkillCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<SkillCount> = Vec::new();

    for record in records {
        match index.get(record.skill.as_str()) {
            Some(&position) => counts[position].count += 1,
            None => {
                index.insert(record.skill.as_str(), counts.len());
                counts.push(SkillCount {
                    skill: record.skill.clone(),
                    count: 1,
                    skill_type: record.skill_type.clone(),
                });
            }
        }
    }

    counts
}

/// Keep skills seen strictly more than `threshold` times.
pub fn filter_by_min_count(counts: &[SkillCount], threshold: usize) -> Vec<SkillCount> {
    counts
        .iter()
        .filter(|c| c.count > threshold)
        .cloned()
        .collect()
}

/// Smallest and largest count, or `None` for an empty aggregation.
pub fn count_range(counts: &[SkillCount]) -> Option<(usize, usize)> {
    let min = counts.iter().map(|c| c.count).min()?;
    let max = counts.iter().map(|c| c.count).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Record> {
        vec![
            Record::new("Python", "TECHNOLOGY"),
            Record::new("Python", "TECHNOLOGY"),
            Record::new("SQL", "TECHNOLOGY"),
            Record::new("Communication", "SOFT"),
        ]
    }

    fn count(skill: &str, count: usize, skill_type: &str) -> SkillCount {
        SkillCount {
            skill: skill.to_string(),
            count,
            skill_type: skill_type.to_string(),
        }
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let counts = aggregate_skill_counts(&scenario());
        assert_eq!(
            counts,
            vec![
                count("Python", 2, "TECHNOLOGY"),
                count("SQL", 1, "TECHNOLOGY"),
                count("Communication", 1, "SOFT"),
            ]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let counts = aggregate_skill_counts(&scenario());

        let kept = filter_by_min_count(&counts, 1);
        assert_eq!(kept, vec![count("Python", 2, "TECHNOLOGY")]);

        let (_, max) = count_range(&counts).unwrap();
        assert!(filter_by_min_count(&counts, max).is_empty());
        assert_eq!(filter_by_min_count(&counts, 0).len(), counts.len());
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<Record> = Vec::new();
        let counts = aggregate_skill_counts(&records);
        assert!(counts.is_empty());
        assert_eq!(count_range(&counts), None);
    }

    #[test]
    fn test_counts_cover_every_record_once() {
        let records = vec![
            Record::new("R", "TECHNOLOGY"),
            Record::new("Python", "TECHNOLOGY"),
            Record::new("R", "TECHNOLOGY"),
            Record::new("Leadership", "SOFT"),
            Record::new("R", "TECHNOLOGY"),
        ];
        let counts = aggregate_skill_counts(&records);

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, records.len());
        assert_eq!(counts.len(), 3);
        assert_eq!(count_range(&counts), Some((1, 3)));
    }

    #[test]
    fn test_first_type_wins() {
        let records = vec![
            Record::new("Statistics", "TECHNICAL"),
            Record::new("Statistics", "BUSINESS"),
        ];
        let counts = aggregate_skill_counts(&records);

        assert_eq!(counts, vec![count("Statistics", 2, "TECHNICAL")]);
    }

    #[test]
    fn test_works_on_filtered_references() {
        let records = scenario();
        let refs: Vec<&Record> = records.iter().filter(|r| r.skill != "SQL").collect();
        let counts = aggregate_skill_counts(refs.iter().copied());

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].count, 2);
    }
}
