//! Draft save/load
//!
//! Errors never escape: every failure becomes a `SaveResult`/`LoadResult`
//! and the caller decides what to show.

use serde_json::Value;

use crate::codec;
use crate::config::WizardConfig;
use crate::fields::FieldSource;
use crate::store::Store;

/// User-facing status signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    Saved,
    SaveFailed,
    DraftLoaded,
    DraftCleared,
}

impl StatusEvent {
    pub fn message(&self) -> &'static str {
        match self {
            StatusEvent::Saved => "Saved (local draft)",
            StatusEvent::SaveFailed => "Save failed",
            StatusEvent::DraftLoaded => "Draft loaded",
            StatusEvent::DraftCleared => "Draft cleared",
        }
    }

    /// Whether to style the status as a failure
    pub fn is_error(&self) -> bool {
        matches!(self, StatusEvent::SaveFailed)
    }
}

/// Outcome of a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveResult {
    Saved {
        status: Option<StatusEvent>,
    },
    Failed {
        error: String,
        status: Option<StatusEvent>,
    },
}

impl SaveResult {
    fn saved(feedback: bool) -> Self {
        SaveResult::Saved {
            status: feedback.then_some(StatusEvent::Saved),
        }
    }

    fn failed(error: String, feedback: bool) -> Self {
        SaveResult::Failed {
            error,
            status: feedback.then_some(StatusEvent::SaveFailed),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SaveResult::Saved { .. })
    }

    /// Status to show; `None` for silent saves
    pub fn status(&self) -> Option<StatusEvent> {
        match self {
            SaveResult::Saved { status } | SaveResult::Failed { status, .. } => *status,
        }
    }
}

/// Outcome of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// Nothing stored under the draft key
    NoDraft,
    Loaded,
    /// Stored text is not JSON; fields untouched
    Malformed { error: String },
    /// Store could not be read; fields untouched
    Unavailable { error: String },
}

impl LoadResult {
    pub fn status(&self) -> Option<StatusEvent> {
        match self {
            LoadResult::Loaded => Some(StatusEvent::DraftLoaded),
            _ => None,
        }
    }
}

/// Saves and loads the single draft through a `Store`
#[derive(Debug)]
pub struct DraftPersistence<S> {
    config: WizardConfig,
    store: S,
}

impl<S: Store> DraftPersistence<S> {
    pub fn new(config: WizardConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encode `fields` and overwrite the draft.
    ///
    /// `feedback` is true for explicit user saves; autosaves pass false and
    /// only log failures.
    pub fn save<F: FieldSource + ?Sized>(&mut self, fields: &F, feedback: bool) -> SaveResult {
        let document = codec::encode(&self.config, fields);
        let json = match document.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize draft: {e}");
                return SaveResult::failed(e.to_string(), feedback);
            }
        };

        match self.store.set(&self.config.storage_key, &json) {
            Ok(()) => {
                if feedback {
                    log::info!("Draft saved ({} bytes)", json.len());
                } else {
                    log::debug!("Draft autosaved ({} bytes)", json.len());
                }
                SaveResult::saved(feedback)
            }
            Err(e) => {
                log::warn!("Could not save draft: {e}");
                SaveResult::failed(e.to_string(), feedback)
            }
        }
    }

    /// Apply the stored draft to `fields`, if there is one
    pub fn load<F: FieldSource + ?Sized>(&self, fields: &mut F) -> LoadResult {
        let raw = match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                log::info!("No draft found, starting fresh");
                return LoadResult::NoDraft;
            }
            Err(e) => {
                log::warn!("Could not read draft: {e}");
                return LoadResult::Unavailable {
                    error: e.to_string(),
                };
            }
        };

        let document: Value = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Could not parse draft: {e}");
                return LoadResult::Malformed {
                    error: e.to_string(),
                };
            }
        };

        codec::decode(&self.config, &document, fields);
        log::info!("Draft loaded");
        LoadResult::Loaded
    }

    /// Delete the stored draft
    pub fn clear(&mut self, feedback: bool) -> Option<StatusEvent> {
        match self.store.remove(&self.config.storage_key) {
            Ok(()) => {
                log::info!("Draft cleared");
                feedback.then_some(StatusEvent::DraftCleared)
            }
            Err(e) => {
                log::warn!("Could not clear draft: {e}");
                None
            }
        }
    }
}
