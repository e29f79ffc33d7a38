//! Wizard context
//!
//! One value per wizard instance: config, fields, draft store and cursor.
//! UI events map onto the methods here; each returns what to render.

use crate::config::WizardConfig;
use crate::export::ExportService;
use crate::fields::{FieldSource, FieldValue};
use crate::navigation::{NavigationController, StepView};
use crate::persistence::{DraftPersistence, LoadResult, SaveResult, StatusEvent};
use crate::store::Store;

pub struct Wizard<F, S> {
    fields: F,
    persistence: DraftPersistence<S>,
    navigation: NavigationController,
    exporter: ExportService,
}

impl<F: FieldSource, S: Store> Wizard<F, S> {
    pub fn new(config: WizardConfig, fields: F, store: S) -> Self {
        let extra: Vec<usize> = fields
            .steps()
            .into_iter()
            .filter(|&step| step >= config.total_steps)
            .collect();
        if !extra.is_empty() {
            log::warn!(
                "Fields on steps {extra:?} are outside 0..{} and will not be saved",
                config.total_steps
            );
        }

        Self {
            navigation: NavigationController::new(&config),
            persistence: DraftPersistence::new(config, store),
            fields,
            exporter: ExportService::new(),
        }
    }

    /// Restore the draft, then show the first step
    pub fn start(&mut self) -> (LoadResult, StepView) {
        let loaded = self.persistence.load(&mut self.fields);
        let view = self
            .navigation
            .go_to(0)
            .unwrap_or_else(|| self.navigation.view());
        (loaded, view)
    }

    pub fn config(&self) -> &WizardConfig {
        self.persistence.config()
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    pub fn current_step(&self) -> usize {
        self.navigation.current_step()
    }

    pub fn view(&self) -> StepView {
        self.navigation.view()
    }

    /// Apply an edit and autosave silently
    pub fn field_changed(&mut self, step: usize, name: &str, value: FieldValue) -> SaveResult {
        self.fields.set_value(step, name, value);
        self.persistence.save(&self.fields, false)
    }

    /// Explicit save from the user, with feedback
    pub fn save(&mut self) -> SaveResult {
        self.persistence.save(&self.fields, true)
    }

    /// Re-read the stored draft into the fields
    pub fn load(&mut self) -> LoadResult {
        self.persistence.load(&mut self.fields)
    }

    pub fn export(&mut self) -> Result<String, serde_json::Error> {
        self.exporter.export(&mut self.persistence, &self.fields)
    }

    /// Drop the stored draft; field values stay as they are
    pub fn clear_draft(&mut self) -> Option<StatusEvent> {
        self.persistence.clear(true)
    }

    pub fn go_to(&mut self, index: isize) -> Option<StepView> {
        self.navigation.go_to(index)
    }

    /// Step-list selection, using the list's 1-based numbering
    pub fn select_step(&mut self, number: usize) -> Option<StepView> {
        let index = isize::try_from(number).ok()?.checked_sub(1)?;
        self.navigation.go_to(index)
    }

    pub fn next(&mut self) -> Option<StepView> {
        self.navigation.next()
    }

    pub fn previous(&mut self) -> Option<StepView> {
        self.navigation.previous()
    }
}
