//! Platform abstraction layer
//!
//! Storage backends for the draft:
//! - `LocalStorageStore`: browser `localStorage` (wasm32)
//! - `FileStore`: one JSON file per key (native)

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageStore, WebWizard};
