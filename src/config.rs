//! Wizard configuration
//!
//! Replaces process-wide globals (step count, storage key) with one value
//! passed to every component, so independent wizards can coexist.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("a wizard needs at least one step")]
    NoSteps,
}

/// Wizard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardConfig {
    /// Store key for the single draft
    pub storage_key: String,
    /// `meta.title` of generated documents
    pub title: String,
    /// `meta.version` of generated documents
    pub version: String,
    /// Number of steps; indices range over `0..total_steps`
    pub total_steps: usize,
    /// Indicator template with `{current}` and `{total}` placeholders
    pub step_label: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_string(),
            title: consts::DOCUMENT_TITLE.to_string(),
            version: consts::DOCUMENT_VERSION.to_string(),
            total_steps: consts::TOTAL_STEPS,
            step_label: consts::STEP_LABEL.to_string(),
        }
    }
}

impl WizardConfig {
    /// Parse a (possibly partial) JSON config; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Read a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.total_steps == 0 {
            return Err(ConfigError::NoSteps);
        }
        Ok(self)
    }

    /// Human-readable indicator for a 0-based step index
    pub fn step_label(&self, index: usize) -> String {
        self.step_label
            .replace("{current}", &(index + 1).to_string())
            .replace("{total}", &self.total_steps.to_string())
    }
}
