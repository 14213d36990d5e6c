//! Skill record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns every skills table must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "company_name",
    "Employment_type",
    "Seniority_level",
    "job_country",
    "job_position",
    "Skill",
    "Type",
];

/// One (job listing, skill) pair extracted from a listing.
///
/// A listing contributes one record per skill it mentions. `skill_type` is kept
/// as the raw column value so unknown categories pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub company_name: String,
    #[serde(rename = "Employment_type")]
    pub employment_type: String,
    #[serde(rename = "Seniority_level")]
    pub seniority_level: String,
    pub job_country: String,
    pub job_position: String,
    #[serde(rename = "Skill")]
    pub skill: String,
    #[serde(rename = "Type")]
    pub skill_type: String,
}

impl Record {
    /// Record with only the skill columns set; the job columns are empty.
    pub fn new(skill: impl Into<String>, skill_type: impl Into<String>) -> Self {
        Self {
            company_name: String::new(),
            employment_type: String::new(),
            seniority_level: String::new(),
            job_country: String::new(),
            job_position: String::new(),
            skill: skill.into(),
            skill_type: skill_type.into(),
        }
    }

    pub fn with_company(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn with_seniority(mut self, seniority_level: impl Into<String>) -> Self {
        self.seniority_level = seniority_level.into();
        self
    }

    pub fn with_country(mut self, job_country: impl Into<String>) -> Self {
        self.job_country = job_country.into();
        self
    }

    /// Category of this record, if `Type` is exactly one of the known four.
    pub fn category(&self) -> Option<SkillCategory> {
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.matches(&self.skill_type))
    }
}

/// Closed set of skill categories found in the `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillCategory {
    Technical,
    Technology,
    Business,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Technology,
        SkillCategory::Business,
        SkillCategory::Soft,
    ];

    /// Value as it appears in the `Type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "TECHNICAL",
            SkillCategory::Technology => "TECHNOLOGY",
            SkillCategory::Business => "BUSINESS",
            SkillCategory::Soft => "SOFT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Technology => "Technology",
            SkillCategory::Business => "Business",
            SkillCategory::Soft => "Soft",
        }
    }

    /// Case-insensitive parse of a category name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "TECHNICAL" => Some(SkillCategory::Technical),
            "TECHNOLOGY" => Some(SkillCategory::Technology),
            "BUSINESS" => Some(SkillCategory::Business),
            "SOFT" => Some(SkillCategory::Soft),
            _ => None,
        }
    }

    /// Exact comparison against a raw `Type` value.
    pub fn matches(&self, skill_type: &str) -> bool {
        skill_type == self.as_str()
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
