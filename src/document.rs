//! Serializable answer snapshot
//!
//! Built fresh for every save/export; never cached.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name -> `true`/`false` (checkboxes) or string (everything else)
pub type StepDocument = IndexMap<String, serde_json::Value>;

/// Document header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub version: String,
    pub title: String,
    /// ISO-8601 UTC timestamp of document construction
    pub generated_at: String,
}

/// All answers, keyed by `step_NN`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub meta: Meta,
    pub steps: IndexMap<String, StepDocument>,
}

impl Document {
    /// Compact JSON, as written to the draft store
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 2-space indented JSON, as shown in the export view
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn step(&self, key: &str) -> Option<&StepDocument> {
        self.steps.get(key)
    }
}
