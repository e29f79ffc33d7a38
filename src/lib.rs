//! PiT Wizard - A multi-step questionnaire with local drafts and JSON export
//!
//! Core modules:
//! - `fields`: Static field registry and the `FieldSource` access trait
//! - `codec`: Field values <-> nested JSON document
//! - `store`: Key-value draft storage
//! - `persistence`: Draft save/load with typed status feedback
//! - `navigation`: Bounded step cursor
//! - `export`: Pretty-printed JSON export
//! - `wizard`: Context object tying the above together
//! - `platform`: Browser/native storage backends

pub mod codec;
pub mod config;
pub mod document;
pub mod export;
pub mod fields;
pub mod navigation;
pub mod persistence;
pub mod platform;
pub mod store;
pub mod wizard;

pub use codec::{decode, encode, encode_at};
pub use config::{ConfigError, WizardConfig};
pub use document::{Document, Meta, StepDocument};
pub use export::ExportService;
pub use fields::{Field, FieldKind, FieldRegistry, FieldSource, FieldSpec, FieldValue, Schema};
pub use navigation::{NavigationController, StepView};
pub use persistence::{DraftPersistence, LoadResult, SaveResult, StatusEvent};
pub use store::{MemoryStore, Store, StoreError};
pub use wizard::Wizard;

/// Wizard constants
pub mod consts {
    /// Number of steps in the questionnaire
    pub const TOTAL_STEPS: usize = 15;
    /// Store key holding the single draft
    pub const STORAGE_KEY: &str = "pit_hessen_draft";
    /// Document format version written to `meta.version`
    pub const DOCUMENT_VERSION: &str = "1.0.0";
    /// Title written to `meta.title`
    pub const DOCUMENT_TITLE: &str = "PiT Hessen – Bedarfsermittlung & Teilhabeplanung";
    /// Default "Step X of N" template
    pub const STEP_LABEL: &str = "Step {current} of {total}";
}

/// Document key for a 0-based step index (`0` -> `step_01`)
#[inline]
pub fn step_key(index: usize) -> String {
    format!("step_{:02}", index + 1)
}
