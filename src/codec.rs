//! Field values <-> `Document`
//!
//! Encoding reads every step's fields; decoding writes back only keys that
//! are present, so a partial draft never blanks out fields it doesn't know.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde_json::Value;

use crate::config::WizardConfig;
use crate::document::{Document, Meta, StepDocument};
use crate::fields::{FieldKind, FieldSource, FieldValue};
use crate::step_key;

/// Build a document stamped with the current time
pub fn encode<F: FieldSource + ?Sized>(config: &WizardConfig, fields: &F) -> Document {
    encode_at(config, fields, Utc::now())
}

/// Build a document stamped with `generated_at`
pub fn encode_at<F: FieldSource + ?Sized>(
    config: &WizardConfig,
    fields: &F,
    generated_at: DateTime<Utc>,
) -> Document {
    let mut steps = IndexMap::with_capacity(config.total_steps);

    for index in 0..config.total_steps {
        let mut step = StepDocument::new();
        for field in fields.fields_of(index) {
            if field.name.is_empty() {
                continue;
            }
            let value = match (field.kind, field.value) {
                (FieldKind::Checkbox, value) => Value::Bool(is_checked(&value)),
                (FieldKind::Text, FieldValue::Text(s)) => Value::String(s),
                (FieldKind::Text, FieldValue::Bool(b)) => Value::String(b.to_string()),
            };
            step.insert(field.name, value);
        }
        steps.insert(step_key(index), step);
    }

    Document {
        meta: Meta {
            version: config.version.clone(),
            title: config.title.clone(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        steps,
    }
}

/// Push values from a parsed draft back into `fields`.
///
/// Anything that isn't an object (the document, `steps`, a step) is skipped
/// without error. Only keys present in a step are written.
pub fn decode<F: FieldSource + ?Sized>(config: &WizardConfig, document: &Value, fields: &mut F) {
    let Some(steps) = document.get("steps").and_then(Value::as_object) else {
        return;
    };

    for index in 0..config.total_steps {
        let Some(step) = steps.get(&step_key(index)).and_then(Value::as_object) else {
            continue;
        };

        for field in fields.fields_of(index) {
            if field.name.is_empty() {
                continue;
            }
            let Some(stored) = step.get(&field.name) else {
                continue;
            };
            let value = match field.kind {
                FieldKind::Checkbox => FieldValue::Bool(truthy(stored)),
                FieldKind::Text => FieldValue::Text(to_text(stored)),
            };
            fields.set_value(index, &field.name, value);
        }
    }
}

fn is_checked(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(b) => *b,
        FieldValue::Text(s) => !s.is_empty(),
    }
}

/// JavaScript-style truthiness: `false`, `null`, `0` and `""` are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{FieldRegistry, FieldSpec, Schema};
    use proptest::prelude::*;
    use serde_json::json;

    fn schema() -> Schema {
        let mut steps: Vec<Vec<FieldSpec>> = (0..15)
            .map(|i| {
                vec![
                    FieldSpec::text(format!("text_{i}")),
                    FieldSpec::checkbox(format!("check_{i}")),
                ]
            })
            .collect();
        steps[0] = vec![FieldSpec::checkbox("consent"), FieldSpec::text("name")];
        Schema::new(steps)
    }

    fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-04T05:06:07.089Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_encode_shapes_document() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        fields.set_value(0, "consent", true.into());
        fields.set_value(0, "name", "Anna".into());

        let doc = encode_at(&config, &fields, fixed_time());
        assert_eq!(doc.meta.version, "1.0.0");
        assert_eq!(doc.meta.title, config.title);
        assert_eq!(doc.meta.generated_at, "2026-03-04T05:06:07.089Z");
        assert_eq!(doc.steps.len(), 15);
        assert_eq!(
            doc.steps.keys().next().map(String::as_str),
            Some("step_01")
        );
        assert_eq!(
            doc.steps.keys().last().map(String::as_str),
            Some("step_15")
        );

        let step = doc.step("step_01").unwrap();
        assert_eq!(step["consent"], json!(true));
        assert_eq!(step["name"], json!("Anna"));
        assert_eq!(doc.step("step_02").unwrap()["check_1"], json!(false));
    }

    #[test]
    fn test_encode_skips_unnamed_fields() {
        let config = WizardConfig::default();
        let schema = Schema::new(vec![vec![FieldSpec::text(""), FieldSpec::text("kept")]]);
        let doc = encode_at(&config, &FieldRegistry::new(&schema), fixed_time());
        let step = doc.step("step_01").unwrap();
        assert_eq!(step.len(), 1);
        assert!(step.contains_key("kept"));
        assert!(doc.step("step_02").unwrap().is_empty());
    }

    #[test]
    fn test_decode_skips_unnamed_fields() {
        let config = WizardConfig::default();
        let schema = Schema::new(vec![vec![FieldSpec::text(""), FieldSpec::text("kept")]]);
        let mut fields = FieldRegistry::new(&schema);
        let before = fields.fields_of(0);

        decode(
            &config,
            &json!({"steps": {"step_01": {"": "x", "kept": "y"}}}),
            &mut fields,
        );

        let after = fields.fields_of(0);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[0].value, FieldValue::Text(String::new()));
        assert_eq!(after[1].value, FieldValue::Text("y".into()));
    }

    #[test]
    fn test_encode_is_idempotent() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        fields.set_value(3, "text_3", "hello".into());
        let first = encode(&config, &fields);
        let second = encode(&config, &fields);
        assert_eq!(first.steps, second.steps);
    }

    #[test]
    fn test_decode_without_steps_is_noop() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        fields.set_value(0, "name", "Anna".into());
        let before = fields.clone();

        decode(&config, &Value::Null, &mut fields);
        decode(&config, &json!({"meta": {}}), &mut fields);
        decode(&config, &json!({"steps": null}), &mut fields);
        decode(&config, &json!({"steps": [1, 2]}), &mut fields);
        decode(&config, &json!("text"), &mut fields);

        assert_eq!(fields.fields_of(0), before.fields_of(0));
    }

    #[test]
    fn test_decode_missing_step_leaves_fields() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        fields.set_value(6, "text_6", "keep me".into());
        fields.set_value(6, "check_6", true.into());

        let mut doc = encode_at(&config, &FieldRegistry::new(&schema()), fixed_time());
        doc.steps.shift_remove("step_07");
        doc.steps["step_08"].insert("text_7".into(), json!("updated"));
        let value = serde_json::to_value(&doc).unwrap();

        decode(&config, &value, &mut fields);
        assert_eq!(
            fields.value(6, "text_6"),
            Some(&FieldValue::Text("keep me".into()))
        );
        assert_eq!(fields.value(6, "check_6"), Some(&FieldValue::Bool(true)));
        assert_eq!(
            fields.value(7, "text_7"),
            Some(&FieldValue::Text("updated".into()))
        );
    }

    #[test]
    fn test_decode_absent_key_differs_from_empty() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        fields.set_value(0, "consent", true.into());
        fields.set_value(0, "name", "Anna".into());

        decode(
            &config,
            &json!({"steps": {"step_01": {"consent": false}}}),
            &mut fields,
        );
        assert_eq!(fields.value(0, "consent"), Some(&FieldValue::Bool(false)));
        assert_eq!(
            fields.value(0, "name"),
            Some(&FieldValue::Text("Anna".into()))
        );

        decode(
            &config,
            &json!({"steps": {"step_01": {"name": ""}}}),
            &mut fields,
        );
        assert_eq!(
            fields.value(0, "name"),
            Some(&FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn test_decode_coerces_loosely() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        let doc = json!({"steps": {
            "step_01": {"consent": "false", "name": 42},
            "step_02": {"check_1": 0, "text_1": null},
            "step_03": {"check_2": [], "text_2": true},
            "step_04": "not an object"
        }});
        fields.set_value(1, "text_1", "old".into());
        fields.set_value(3, "text_3", "untouched".into());

        decode(&config, &doc, &mut fields);
        // Non-empty strings are truthy, even "false"
        assert_eq!(fields.value(0, "consent"), Some(&FieldValue::Bool(true)));
        assert_eq!(
            fields.value(0, "name"),
            Some(&FieldValue::Text("42".into()))
        );
        assert_eq!(fields.value(1, "check_1"), Some(&FieldValue::Bool(false)));
        assert_eq!(
            fields.value(1, "text_1"),
            Some(&FieldValue::Text(String::new()))
        );
        assert_eq!(fields.value(2, "check_2"), Some(&FieldValue::Bool(true)));
        assert_eq!(
            fields.value(2, "text_2"),
            Some(&FieldValue::Text("true".into()))
        );
        assert_eq!(
            fields.value(3, "text_3"),
            Some(&FieldValue::Text("untouched".into()))
        );
    }

    #[test]
    fn test_decode_ignores_generated_at() {
        let config = WizardConfig::default();
        let mut fields = FieldRegistry::new(&schema());
        let doc = json!({"meta": {"generatedAt": "1999-01-01T00:00:00.000Z"}, "steps": {}});
        decode(&config, &doc, &mut fields);
        let fresh = encode_at(&config, &fields, fixed_time());
        assert_eq!(fresh.meta.generated_at, "2026-03-04T05:06:07.089Z");
    }

    proptest! {
        #[test]
        fn prop_round_trip_restores_values(
            texts in proptest::collection::vec(".*", 15),
            checks in proptest::collection::vec(any::<bool>(), 15),
        ) {
            let config = WizardConfig::default();
            let schema = schema();
            let mut filled = FieldRegistry::new(&schema);
            for i in 1..15 {
                filled.set_value(i, &format!("text_{i}"), texts[i].clone().into());
                filled.set_value(i, &format!("check_{i}"), checks[i].into());
            }
            filled.set_value(0, "name", texts[0].clone().into());
            filled.set_value(0, "consent", checks[0].into());

            let json = encode(&config, &filled).to_json().unwrap();
            let parsed: Value = serde_json::from_str(&json).unwrap();
            let mut restored = FieldRegistry::new(&schema);
            decode(&config, &parsed, &mut restored);

            for i in 0..15 {
                prop_assert_eq!(restored.fields_of(i), filled.fields_of(i));
            }
        }
    }
}
