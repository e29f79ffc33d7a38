//! Browser bindings
//!
//! `LocalStorageStore` keeps the draft in `window.localStorage`; `WebWizard`
//! is the handle the page script drives from DOM events.

use wasm_bindgen::prelude::*;

use crate::config::WizardConfig;
use crate::fields::{FieldRegistry, FieldValue, Schema};
use crate::persistence::StatusEvent;
use crate::store::{Store, StoreError};
use crate::wizard::Wizard;

/// Logging and panic hook for the page
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("PiT wizard loaded");
}

/// Draft storage in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".into()))
    }
}

impl Store for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // QuotaExceededError lands here
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }
}

/// Wizard handle for the page script
#[wasm_bindgen]
pub struct WebWizard {
    inner: Wizard<FieldRegistry, LocalStorageStore>,
    status: Option<StatusEvent>,
}

#[wasm_bindgen]
impl WebWizard {
    /// `schema_json`: `{"steps": [[{"name": ..., "kind": ...}, ...], ...]}`
    #[wasm_bindgen(constructor)]
    pub fn new(schema_json: &str) -> Result<WebWizard, JsValue> {
        let schema =
            Schema::from_json(schema_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: Wizard::new(
                WizardConfig::default(),
                FieldRegistry::new(&schema),
                LocalStorageStore,
            ),
            status: None,
        })
    }

    /// Load the draft and show step 0. Returns the active step.
    pub fn start(&mut self) -> usize {
        let (loaded, view) = self.inner.start();
        if let Some(status) = loaded.status() {
            self.status = Some(status);
        }
        view.active
    }

    /// Text-like input changed; autosaves
    pub fn set_text(&mut self, step: usize, name: &str, value: &str) {
        self.inner.field_changed(step, name, FieldValue::Text(value.to_string()));
    }

    /// Checkbox toggled; autosaves
    pub fn set_checked(&mut self, step: usize, name: &str, checked: bool) {
        self.inner.field_changed(step, name, FieldValue::Bool(checked));
    }

    pub fn text_value(&self, step: usize, name: &str) -> Option<String> {
        self.inner
            .fields()
            .value(step, name)
            .and_then(FieldValue::as_text)
            .map(str::to_string)
    }

    pub fn is_checked(&self, step: usize, name: &str) -> bool {
        self.inner
            .fields()
            .value(step, name)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    /// Save button
    pub fn save(&mut self) -> bool {
        let result = self.inner.save();
        self.status = result.status();
        result.is_saved()
    }

    /// Export button: pretty JSON for the export view
    pub fn export(&mut self) -> Result<String, JsValue> {
        self.inner
            .export()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn clear_draft(&mut self) {
        self.status = self.inner.clear_draft();
    }

    pub fn go_to(&mut self, index: i32) -> bool {
        self.inner.go_to(index as isize).is_some()
    }

    pub fn next(&mut self) -> bool {
        self.inner.next().is_some()
    }

    pub fn previous(&mut self) -> bool {
        self.inner.previous().is_some()
    }

    pub fn current_step(&self) -> usize {
        self.inner.current_step()
    }

    /// "Step X of N"
    pub fn step_label(&self) -> String {
        self.inner.view().label
    }

    pub fn can_go_previous(&self) -> bool {
        self.inner.view().can_go_previous
    }

    pub fn can_go_next(&self) -> bool {
        self.inner.view().can_go_next
    }

    /// Latest status text, if any
    pub fn status_message(&self) -> Option<String> {
        self.status.map(|s| s.message().to_string())
    }

    pub fn status_is_error(&self) -> bool {
        self.status.is_some_and(|s| s.is_error())
    }
}
