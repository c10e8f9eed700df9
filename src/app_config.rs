use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Maximum number of sentences in a summary
    #[serde(default = "default_max_sentences")]
    pub max_sentences: usize,

    /// Maximum number of extracted keywords
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_sentences() -> usize {
    5
}

fn default_max_keywords() -> usize {
    15
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.max_sentences == 0 {
            return Err(anyhow!("max_sentences must be a positive integer"));
        }
        if self.max_keywords == 0 {
            return Err(anyhow!("max_keywords must be a positive integer"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            max_sentences: default_max_sentences(),
            max_keywords: default_max_keywords(),
            log_level: LogLevel::default(),
        }
    }
}
