//! Filter dimensions and user selections

use crate::error::{Result, SkillsDashboardError};
use crate::input::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use strsim::jaro_winkler;

/// Sentinel option meaning "no restriction".
pub const ALL_SENTINEL: &str = "All";

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A filterable attribute of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Country,
    EmploymentType,
    SeniorityLevel,
    JobPosition,
    Company,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Country,
        Dimension::EmploymentType,
        Dimension::SeniorityLevel,
        Dimension::JobPosition,
        Dimension::Company,
    ];

    /// Dimensions that make up the job context of the match calculator.
    pub const JOB_CONTEXT: [Dimension; 3] = [
        Dimension::Country,
        Dimension::EmploymentType,
        Dimension::SeniorityLevel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::EmploymentType => "employment_type",
            Dimension::SeniorityLevel => "seniority",
            Dimension::JobPosition => "job_position",
            Dimension::Company => "company",
        }
    }

    /// Source column backing this dimension.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Country => "job_country",
            Dimension::EmploymentType => "Employment_type",
            Dimension::SeniorityLevel => "Seniority_level",
            Dimension::JobPosition => "job_position",
            Dimension::Company => "company_name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Country => "Country",
            Dimension::EmploymentType => "Employment Type",
            Dimension::SeniorityLevel => "Seniority Level",
            Dimension::JobPosition => "Job Position",
            Dimension::Company => "Company",
        }
    }

    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Dimension::Country => &record.job_country,
            Dimension::EmploymentType => &record.employment_type,
            Dimension::SeniorityLevel => &record.seniority_level,
            Dimension::JobPosition => &record.job_position,
            Dimension::Company => &record.company_name,
        }
    }

    /// Resolve a user-facing or column name to a dimension.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = name.trim().to_lowercase().replace(['-', ' '], "_");
        let dimension = match normalized.as_str() {
            "country" | "job_country" => Dimension::Country,
            "employment_type" | "employment" => Dimension::EmploymentType,
            "seniority" | "seniority_level" => Dimension::SeniorityLevel,
            "job_position" | "position" => Dimension::JobPosition,
            "company" | "company_name" => Dimension::Company,
            _ => return Err(Self::unknown(name, &normalized)),
        };
        Ok(dimension)
    }

    fn unknown(name: &str, normalized: &str) -> SkillsDashboardError {
        let suggestion = Self::ALL
            .iter()
            .map(|d| (d.name(), jaro_winkler(normalized, d.name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate);

        let known: Vec<&str> = Self::ALL.iter().map(|d| d.name()).collect();
        let message = match suggestion {
            Some(candidate) => format!(
                "'{}' (did you mean '{}'?). Supported: {}",
                name,
                candidate,
                known.join(", ")
            ),
            None => format!("'{}'. Supported: {}", name, known.join(", ")),
        };
        SkillsDashboardError::InvalidDimension(message)
    }
}

impl FromStr for Dimension {
    type Err = SkillsDashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Dimension::parse(s)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when a chosen value set places no restriction on its dimension.
pub fn is_unrestricted(chosen: &BTreeSet<String>) -> bool {
    chosen.is_empty() || (chosen.len() == 1 && chosen.contains(ALL_SENTINEL))
}

/// Chosen values per dimension for one interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selections: BTreeMap<Dimension, BTreeSet<String>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(dimension, values);
        self
    }

    /// Add values to a dimension. Selecting no values still registers the
    /// dimension, as an unrestricted one.
    pub fn select<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .entry(dimension)
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    pub fn select_named<I, S>(&mut self, name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dimension = Dimension::parse(name)?;
        self.select(dimension, values);
        Ok(())
    }

    /// Parse a `dimension=value` expression.
    pub fn parse_filter(&mut self, expr: &str) -> Result<()> {
        let (name, value) = expr.split_once('=').ok_or_else(|| {
            SkillsDashboardError::InvalidInput(format!(
                "Filter '{}' must have the form dimension=value",
                expr
            ))
        })?;
        let value = value.trim();
        if value.is_empty() {
            return Err(SkillsDashboardError::InvalidInput(format!(
                "Filter '{}' has no value; use {}=All to lift the restriction",
                expr,
                name.trim()
            )));
        }
        self.select_named(name, [value])
    }

    pub fn get(&self, dimension: Dimension) -> Option<&BTreeSet<String>> {
        self.selections.get(&dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &BTreeSet<String>)> {
        self.selections.iter().map(|(d, values)| (*d, values))
    }

    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.selections.keys().copied()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.selections.values().all(is_unrestricted)
    }

    /// Fail if any selected dimension is outside `allowed`.
    pub fn ensure_only(&self, allowed: &[Dimension]) -> Result<()> {
        match self.dimensions().find(|d| !allowed.contains(d)) {
            Some(dimension) => {
                let names: Vec<&str> = allowed.iter().map(|d| d.name()).collect();
                Err(SkillsDashboardError::InvalidDimension(format!(
                    "'{}' is not available here. Supported: {}",
                    dimension,
                    names.join(", ")
                )))
            }
            None => Ok(()),
        }
    }
}
