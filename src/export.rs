//! JSON export
//!
//! Export always syncs the draft first (silently) so the stored draft and
//! the exported text describe the same answers.

use crate::codec;
use crate::fields::FieldSource;
use crate::persistence::DraftPersistence;
use crate::store::Store;

/// Renders the current answers for display/copy
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Silent save, then a fresh document as 2-space indented JSON
    pub fn export<S: Store, F: FieldSource + ?Sized>(
        &self,
        persistence: &mut DraftPersistence<S>,
        fields: &F,
    ) -> Result<String, serde_json::Error> {
        let saved = persistence.save(fields, false);
        if !saved.is_saved() {
            log::warn!("Exporting without an up-to-date draft");
        }

        let text = codec::encode(persistence.config(), fields).to_pretty_json()?;
        log::info!("Exported {} bytes of JSON", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::fields::{FieldRegistry, FieldSpec, Schema};
    use crate::persistence::tests::{FullStore, sample_fields};
    use crate::store::MemoryStore;
    use serde_json::{Value, json};

    #[test]
    fn test_export_contains_answers() {
        let mut persistence = DraftPersistence::new(WizardConfig::default(), MemoryStore::new());
        let text = ExportService::new()
            .export(&mut persistence, &sample_fields())
            .unwrap();

        let expected = concat!(
            "\n  \"steps\": {\n    \"step_01\": {\n",
            "      \"consent\": true,\n      \"name\": \"Anna\"\n    },"
        );
        assert!(text.contains(expected));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["steps"]["step_01"],
            json!({"consent": true, "name": "Anna"})
        );
        assert_eq!(value["meta"]["version"], "1.0.0");
    }

    #[test]
    fn test_export_syncs_draft() {
        let mut persistence = DraftPersistence::new(WizardConfig::default(), MemoryStore::new());
        let fields = sample_fields();
        let text = ExportService::new()
            .export(&mut persistence, &fields)
            .unwrap();

        let raw = persistence
            .store()
            .get("pit_hessen_draft")
            .unwrap()
            .unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        let exported: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(stored["steps"], exported["steps"]);
    }

    #[test]
    fn test_export_single_step_matches_layout() {
        let config = WizardConfig {
            total_steps: 1,
            ..WizardConfig::default()
        };
        let mut fields = FieldRegistry::new(&Schema::new(vec![vec![
            FieldSpec::checkbox("consent"),
            FieldSpec::text("name"),
        ]]));
        fields.set_value(0, "consent", true.into());
        fields.set_value(0, "name", "Anna".into());

        let mut persistence = DraftPersistence::new(config, MemoryStore::new());
        let text = ExportService::new()
            .export(&mut persistence, &fields)
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["steps"],
            json!({"step_01": {"consent": true, "name": "Anna"}})
        );
    }

    #[test]
    fn test_export_survives_failed_save() {
        let mut persistence = DraftPersistence::new(WizardConfig::default(), FullStore::default());
        let text = ExportService::new()
            .export(&mut persistence, &sample_fields())
            .unwrap();
        assert!(text.contains("\"name\": \"Anna\""));
    }
}
