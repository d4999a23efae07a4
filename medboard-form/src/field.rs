//! Field rendering and edit capture.
//!
//! Polymorphic over [`FieldKind`]: one renderer and one input-application
//! function cover every field of every section.

use crate::error::{FormError, FormResult};
use medboard_model::{FieldKind, FieldSpec};
use serde::Serialize;
use serde_json::Value;

/// A user edit addressed to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Replacement text for a scalar field (text, email, tel, password,
    /// number, date, textarea).
    Text(String),
    /// Checkbox state.
    Toggle(bool),
    /// Chosen option of a single-select; the empty string clears it.
    Choose(String),
    /// Toggles one option of a multi-select: present is removed, absent is
    /// appended.
    ToggleOption(String),
}

/// One selectable option row of a (multi-)select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub id: String,
    pub selected: bool,
}

/// Pure view-model for one field of the form.
///
/// The modal chrome renders this and feeds interactions back as
/// [`FieldInput`]s; the widget holds no state beyond the dropdown
/// disclosure flag.
#[derive(Debug, Clone, Serialize)]
pub struct FieldWidget {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: Value,
    pub options: Vec<OptionItem>,
    /// Dropdown open/closed state.
    pub open: bool,
}

impl FieldWidget {
    /// Flips the dropdown disclosure state.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }
}

/// Builds the view-model for a field given its current value.
#[must_use]
pub fn render_field(spec: &FieldSpec, current: &Value) -> FieldWidget {
    let options = spec
        .options
        .iter()
        .map(|option| OptionItem {
            id: option.clone(),
            selected: selects(current, option),
        })
        .collect();
    FieldWidget {
        name: spec.name.clone(),
        label: spec.label.clone(),
        kind: spec.kind,
        required: spec.required,
        value: current.clone(),
        options,
        open: false,
    }
}

/// Applies one edit to a field's current value, producing the new value.
///
/// Single-select values are constrained to the declared option universe;
/// multi-select toggles treat the list as a set (no duplicates, insertion
/// order preserved).
pub fn apply_input(spec: &FieldSpec, current: &Value, input: FieldInput) -> FormResult<Value> {
    match input {
        FieldInput::Text(text) if spec.kind.is_text_scalar() => Ok(Value::String(text)),
        FieldInput::Toggle(on) if spec.kind == FieldKind::Checkbox => Ok(Value::Bool(on)),
        FieldInput::Choose(option) if spec.kind == FieldKind::Select => {
            if option.is_empty() || spec.options.contains(&option) {
                Ok(Value::String(option))
            } else {
                Err(FormError::UnknownOption {
                    field: spec.name.clone(),
                    option,
                })
            }
        }
        FieldInput::ToggleOption(option) if spec.kind == FieldKind::MultiSelect => {
            if !spec.options.contains(&option) {
                return Err(FormError::UnknownOption {
                    field: spec.name.clone(),
                    option,
                });
            }
            Ok(Value::Array(toggled(current, &option)))
        }
        _ => Err(FormError::KindMismatch {
            field: spec.name.clone(),
        }),
    }
}

fn selects(value: &Value, option: &str) -> bool {
    match value {
        Value::String(s) => s == option,
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(option)),
        _ => false,
    }
}

fn toggled(current: &Value, option: &str) -> Vec<Value> {
    let mut items = current.as_array().cloned().unwrap_or_default();
    match items
        .iter()
        .position(|item| item.as_str() == Some(option))
    {
        Some(index) => {
            items.remove(index);
        }
        None => items.push(Value::String(option.to_string())),
    }
    items
}
