//! Configuration file parsing for .checkframe.toml

use crate::diagnostic::Checker;
use crate::filter::LevelFilter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".checkframe.toml";

/// Main configuration structure for .checkframe.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckframeConfig {
    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Allowed levels per checker
    #[serde(default)]
    pub log_level: LogLevelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Print terminal reports and summaries
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Emit runtime envelopes for a connected overlay
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLevelConfig {
    #[serde(default = "default_levels")]
    pub typescript: Vec<String>,

    #[serde(default = "default_levels")]
    pub vue_tsc: Vec<String>,

    #[serde(default = "default_levels")]
    pub vls: Vec<String>,

    #[serde(default = "default_levels")]
    pub eslint: Vec<String>,
}

// Default functions
fn default_true() -> bool {
    true
}

fn default_levels() -> Vec<String> {
    vec![
        "error".to_string(),
        "warning".to_string(),
        "suggestion".to_string(),
        "message".to_string(),
    ]
}

impl Default for CheckframeConfig {
    fn default() -> Self {
        toml::from_str("").expect("empty TOML should parse to defaults")
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LogLevelConfig {
    fn default() -> Self {
        Self {
            typescript: default_levels(),
            vue_tsc: default_levels(),
            vls: default_levels(),
            eslint: default_levels(),
        }
    }
}

impl LogLevelConfig {
    /// The configured level names for one checker
    pub fn levels_for(&self, checker: Checker) -> &[String] {
        match checker {
            Checker::TypeScript => &self.typescript,
            Checker::VueTsc => &self.vue_tsc,
            Checker::Vls => &self.vls,
            Checker::EsLint => &self.eslint,
        }
    }

    /// Build the level filter for one checker
    pub fn filter_for(&self, checker: Checker) -> Result<LevelFilter> {
        Ok(LevelFilter::from_names(self.levels_for(checker))?)
    }
}

impl CheckframeConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CheckframeConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .checkframe.toml from the given directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
