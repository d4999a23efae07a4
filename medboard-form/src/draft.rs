//! Draft-edit state for the modal form.

use crate::error::{FormError, FormResult};
use crate::field::{FieldInput, FieldWidget, apply_input, render_field};
use medboard_model::{FieldMap, Record, SchemaRegistry};
use medboard_types::SectionKind;
use serde_json::Value;

/// The transient, uncommitted copy of a record under edit.
///
/// Opening a draft for an existing record takes a structural clone of its
/// fields — the draft and the stored record are never the same memory, so
/// canceling discards everything and nothing partial is ever visible to
/// the store.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    kind: SectionKind,
    values: FieldMap,
}

impl FormDraft {
    /// Opens a form for the given section.
    ///
    /// Starts from the schema defaults, so every declared field is present
    /// even when `initial` predates a schema addition, then overlays the
    /// initial record. Fields whose default is boolean are coerced through
    /// JSON truthiness to a strict bool; previously serialized data may
    /// carry `0`/`1`/`""` instead.
    #[must_use]
    pub fn open(kind: SectionKind, initial: Option<&Record>) -> Self {
        let schema = SchemaRegistry::get(kind);
        let mut values = schema.defaults();
        if let Some(record) = initial {
            for (name, value) in record.fields.clone() {
                let coerced = match values.get(&name) {
                    Some(Value::Bool(_)) => Value::Bool(truthy(&value)),
                    _ => value,
                };
                values.insert(name, coerced);
            }
        }
        Self { kind, values }
    }

    /// The section this draft belongs to.
    #[must_use]
    pub const fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Current draft value of one field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Applies a single edit to the draft.
    pub fn set(&mut self, field: &str, input: FieldInput) -> FormResult<()> {
        let schema = SchemaRegistry::get(self.kind);
        let spec = schema.field(field).ok_or_else(|| FormError::UnknownField {
            field: field.to_string(),
        })?;
        let current = self
            .values
            .get(field)
            .cloned()
            .unwrap_or_else(|| spec.default.clone());
        let next = apply_input(spec, &current, input)?;
        self.values.insert(field.to_string(), next);
        Ok(())
    }

    /// View-models for the schema's fields, in form order.
    #[must_use]
    pub fn render(&self) -> Vec<FieldWidget> {
        let schema = SchemaRegistry::get(self.kind);
        schema
            .fields
            .iter()
            .map(|spec| {
                let value = self.values.get(&spec.name).unwrap_or(&spec.default);
                render_field(spec, value)
            })
            .collect()
    }

    /// Validates and normalizes the draft, returning the field map to store.
    ///
    /// Every required field must hold a non-empty value; boolean fields are
    /// exempt since `false` is a value, not an absence. The returned map
    /// carries every declared field — an empty multi-select stays an
    /// explicit empty list — and no identifier: assigning one is the
    /// caller's job.
    pub fn submit(&self) -> FormResult<FieldMap> {
        let schema = SchemaRegistry::get(self.kind);
        let empty: Vec<String> = schema
            .fields
            .iter()
            .filter(|spec| spec.required && !matches!(spec.default, Value::Bool(_)))
            .filter(|spec| is_empty(self.values.get(&spec.name)))
            .map(|spec| spec.name.clone())
            .collect();
        if !empty.is_empty() {
            return Err(FormError::Validation { fields: empty });
        }

        let mut fields = self.values.clone();
        for spec in &schema.fields {
            fields
                .entry(spec.name.clone())
                .or_insert_with(|| spec.default.clone());
        }
        Ok(fields)
    }
}

/// Empty in the required-field sense: missing, null, `""`, or `[]`.
fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// JSON truthiness, matching how previously serialized flag values behave.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
