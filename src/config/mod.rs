// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the practice command.
//!
//! Settings live in a small YAML file. Every field is optional and falls
//! back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::Level;

/// How sheets are written to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Lilypond,
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeConfig {
    /// File holding the completion map
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,
    /// Maximum log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: OutputFormat,
    /// Print the drawn excerpt along with the sheets
    #[serde(default = "default_show_excerpt")]
    pub show_excerpt: bool,
}

fn default_progress_file() -> PathBuf {
    PathBuf::from("practice-progress.yaml")
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_show_excerpt() -> bool {
    true
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            progress_file: default_progress_file(),
            log_level: default_log_level(),
            format: OutputFormat::default(),
            show_excerpt: default_show_excerpt(),
        }
    }
}

impl PracticeConfig {
    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a configuration from a YAML string; an empty document is all defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check values serde cannot check
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        if self.progress_file.as_os_str().is_empty() {
            bail!("progress_file must not be empty");
        }
        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow::anyhow!("Invalid log level: {:?}", self.log_level))
    }
}
