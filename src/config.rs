//! Configuration management for the skills dashboard

use crate::error::{Result, SkillsDashboardError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub chart: ChartConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: PathBuf,
    /// Single-character field delimiter for CSV and plain text tables.
    pub delimiter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Skills must appear more often than this to be charted.
    pub default_threshold: usize,
    /// Show at most this many bars (the most frequent ones); 0 shows all.
    pub max_bars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                path: PathBuf::from("data").join("skills_with_jobs.csv"),
                delimiter: ",".to_string(),
            },
            chart: ChartConfig {
                default_threshold: 10,
                max_bars: 0,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the user config directory, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| {
                SkillsDashboardError::Configuration(format!("Failed to parse config: {}", e))
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| {
                SkillsDashboardError::Configuration(format!("Failed to serialize config: {}", e))
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skills-dashboard")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte().map(|_| ())
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.data.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            b"\\t" => Ok(b'\t'),
            _ => Err(SkillsDashboardError::Configuration(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.data.delimiter
            ))),
        }
    }
}
