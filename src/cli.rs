//! CLI interface for the skills dashboard

use crate::config::OutputFormat;
use crate::engine::matching::SkillSelections;
use crate::engine::selection::{Dimension, SelectionSet};
use crate::error::Result;
use crate::input::record::SkillCategory;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skills-dashboard")]
#[command(about = "Explore skill demand in job listings and score your own skills against it")]
#[command(long_about = "Filter a table of (job listing, skill) rows by country, employment type, \
seniority, position and company, chart skill frequencies, and compute how much of a job market \
your skills cover")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skills table to read (overrides data.path from the configuration)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chart how often each skill is requested
    Chart {
        #[command(flatten)]
        filters: ChartFilterArgs,

        /// Only chart skills seen more than this many times
        #[arg(short, long)]
        threshold: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score your skills against a job context
    Match {
        #[command(flatten)]
        context: ContextArgs,

        #[command(flatten)]
        skills: SkillArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the values each filter dimension accepts
    Options {
        /// Dimension to list (country, employment_type, seniority, job_position, company)
        dimension: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the skills available per category within a job context
    Candidates {
        #[command(flatten)]
        context: ContextArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Job context filters shared by the chart, match and candidates views
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Job country (repeatable)
    #[arg(long, value_name = "COUNTRY")]
    pub country: Vec<String>,

    /// Employment type (repeatable)
    #[arg(long, value_name = "TYPE")]
    pub employment_type: Vec<String>,

    /// Seniority level (repeatable)
    #[arg(long, value_name = "LEVEL")]
    pub seniority: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ChartFilterArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Job position (repeatable)
    #[arg(long, value_name = "POSITION")]
    pub job_position: Vec<String>,

    /// Company name (repeatable)
    #[arg(long, value_name = "COMPANY")]
    pub company: Vec<String>,

    /// Generic filter in the form dimension=value (repeatable)
    #[arg(short, long, value_name = "DIM=VALUE")]
    pub filter: Vec<String>,
}

/// The skills you have, per category. A category left out counts as fully covered.
#[derive(Args, Debug, Clone, Default)]
pub struct SkillArgs {
    /// Technical skill you have (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub technical: Vec<String>,

    /// Technology you know (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub technology: Vec<String>,

    /// Business skill you have (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub business: Vec<String>,

    /// Soft skill you have (repeatable)
    #[arg(long, value_name = "SKILL")]
    pub soft: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file (a directory gets a generated file name)
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Include extra detail (skill types, full lists, report metadata)
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

impl ContextArgs {
    pub fn to_selections(&self) -> SelectionSet {
        let mut selections = SelectionSet::new();
        self.apply(&mut selections);
        selections
    }

    fn apply(&self, selections: &mut SelectionSet) {
        let pairs = [
            (Dimension::Country, &self.country),
            (Dimension::EmploymentType, &self.employment_type),
            (Dimension::SeniorityLevel, &self.seniority),
        ];
        for (dimension, values) in pairs {
            if !values.is_empty() {
                selections.select(dimension, values.iter().cloned());
            }
        }
    }
}

impl ChartFilterArgs {
    pub fn to_selections(&self) -> Result<SelectionSet> {
        let mut selections = SelectionSet::new();
        self.context.apply(&mut selections);

        if !self.job_position.is_empty() {
            selections.select(Dimension::JobPosition, self.job_position.iter().cloned());
        }
        if !self.company.is_empty() {
            selections.select(Dimension::Company, self.company.iter().cloned());
        }
        for expr in &self.filter {
            selections.parse_filter(expr)?;
        }
        Ok(selections)
    }
}

impl SkillArgs {
    pub fn to_selections(&self) -> SkillSelections {
        let mut selections = SkillSelections::new();
        let pairs = [
            (SkillCategory::Technical, &self.technical),
            (SkillCategory::Technology, &self.technology),
            (SkillCategory::Business, &self.business),
            (SkillCategory::Soft, &self.soft),
        ];
        for (category, skills) in pairs {
            if !skills.is_empty() {
                selections.select(category, skills.iter().cloned());
            }
        }
        selections
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}
