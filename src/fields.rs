//! Field registry
//!
//! A static schema (step index -> fields) stands in for scanning a live UI
//! tree. `FieldSource` is the only way the codec touches field values.

use serde::{Deserialize, Serialize};

/// Input kind of a field. Decides the stored JSON type, never the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Stored as a JSON boolean
    Checkbox,
    /// Any other input (text, textarea, select, date, ...), stored as a string
    #[default]
    Text,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Checkbox => "checkbox",
            FieldKind::Text => "text",
        }
    }

    /// Map an HTML-style input type to a kind; everything but checkboxes is text
    pub fn from_input_type(s: &str) -> Self {
        if s.eq_ignore_ascii_case("checkbox") {
            FieldKind::Checkbox
        } else {
            FieldKind::Text
        }
    }

    /// Initial value of a fresh field of this kind
    pub fn empty_value(&self) -> FieldValue {
        match self {
            FieldKind::Checkbox => FieldValue::Bool(false),
            FieldKind::Text => FieldValue::Text(String::new()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        FieldKind::from_input_type(&s)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Convert to the native representation of `kind`
    pub fn into_kind(self, kind: FieldKind) -> FieldValue {
        match (kind, self) {
            (FieldKind::Checkbox, FieldValue::Text(s)) => FieldValue::Bool(!s.is_empty()),
            (FieldKind::Text, FieldValue::Bool(b)) => FieldValue::Text(b.to_string()),
            (_, value) => value,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// Schema entry for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub name: String,
    /// Fallback identifier used when `name` is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind,
        }
    }

    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// `name`, else `id`, else nothing
    pub fn resolved_name(&self) -> Option<&str> {
        if !self.name.is_empty() {
            return Some(&self.name);
        }
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A field as seen through a `FieldSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Resolved name; empty when the field has none
    pub name: String,
    pub kind: FieldKind,
    pub value: FieldValue,
}

/// Read/write access to the wizard's fields, grouped by step
pub trait FieldSource {
    /// Step indices that have fields, in order
    fn steps(&self) -> Vec<usize>;

    /// Fields of one step in declaration order (empty for unknown steps)
    fn fields_of(&self, step: usize) -> Vec<Field>;

    /// Set a field's value by name; unknown fields are ignored
    fn set_value(&mut self, step: usize, name: &str, value: FieldValue);
}

/// Static step -> fields registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub steps: Vec<Vec<FieldSpec>>,
}

impl Schema {
    pub fn new(steps: Vec<Vec<FieldSpec>>) -> Self {
        Self { steps }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// In-memory `FieldSource` built from a `Schema`
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    steps: Vec<Vec<Field>>,
}

impl FieldRegistry {
    /// Build with every field at its empty value
    pub fn new(schema: &Schema) -> Self {
        let steps = schema
            .steps
            .iter()
            .map(|specs| {
                specs
                    .iter()
                    .map(|spec| Field {
                        name: spec.resolved_name().unwrap_or_default().to_string(),
                        kind: spec.kind,
                        value: spec.kind.empty_value(),
                    })
                    .collect()
            })
            .collect();
        Self { steps }
    }

    /// Current value of a named field
    pub fn value(&self, step: usize, name: &str) -> Option<&FieldValue> {
        self.field(step, name).map(|f| &f.value)
    }

    fn field(&self, step: usize, name: &str) -> Option<&Field> {
        if name.is_empty() {
            return None;
        }
        self.steps.get(step)?.iter().find(|f| f.name == name)
    }
}

impl FieldSource for FieldRegistry {
    fn steps(&self) -> Vec<usize> {
        (0..self.steps.len()).collect()
    }

    fn fields_of(&self, step: usize) -> Vec<Field> {
        self.steps.get(step).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, step: usize, name: &str, value: FieldValue) {
        if name.is_empty() {
            return;
        }
        let field = self
            .steps
            .get_mut(step)
            .and_then(|fields| fields.iter_mut().find(|f| f.name == name));

        match field {
            Some(field) => field.value = value.into_kind(field.kind),
            None => log::debug!("Ignoring value for unknown field {name:?} on step {step}"),
        }
    }
}
