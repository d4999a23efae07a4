use crate::record::FieldMap;
use medboard_types::SectionKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The edit control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    Number,
    Date,
    TextArea,
    Checkbox,
    Select,
    MultiSelect,
}

impl FieldKind {
    /// Kinds whose value is a single text scalar captured as typed input.
    /// Number and date inputs capture what was typed, as strings.
    #[must_use]
    pub const fn is_text_scalar(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Email
                | Self::Tel
                | Self::Password
                | Self::Number
                | Self::Date
                | Self::TextArea
        )
    }
}

/// Declares one editable field of an entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Fixed option universe for select / multi-select kinds. Part of the
    /// schema, not user-editable data.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Value a fresh draft starts from. Also fixes the field's value shape:
    /// string, bool, or list.
    pub default: Value,
}

impl FieldSpec {
    fn scalar(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: true,
            options: Vec::new(),
            default: Value::String(String::new()),
        }
    }

    /// Shorthand for a required single-line text field.
    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Text)
    }

    /// Shorthand for an email field.
    #[must_use]
    pub fn email(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Email)
    }

    /// Shorthand for a telephone field.
    #[must_use]
    pub fn tel(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Tel)
    }

    /// Shorthand for a password field.
    #[must_use]
    pub fn password(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Password)
    }

    /// Shorthand for a numeric field.
    #[must_use]
    pub fn number(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Number)
    }

    /// Shorthand for a date field.
    #[must_use]
    pub fn date(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::Date)
    }

    /// Shorthand for a multi-line text field.
    #[must_use]
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::scalar(name, label, FieldKind::TextArea)
    }

    /// Marks the field optional; empty values pass submit validation.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Shorthand for a checkbox. Never required: `false` is a value, not an
    /// absence.
    #[must_use]
    pub fn checkbox(name: &str, label: &str, default_on: bool) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Checkbox,
            required: false,
            options: Vec::new(),
            default: Value::Bool(default_on),
        }
    }

    /// Shorthand for a single-select over a fixed option universe. Empty
    /// string until an option is chosen.
    #[must_use]
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Select,
            required: true,
            options: options.iter().map(ToString::to_string).collect(),
            default: Value::String(String::new()),
        }
    }

    /// Shorthand for a multi-select toggle list over a fixed option universe.
    #[must_use]
    pub fn multi_select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::MultiSelect,
            required: false,
            options: options.iter().map(ToString::to_string).collect(),
            default: Value::Array(Vec::new()),
        }
    }
}

/// How a list-view cell renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRender {
    /// Plain text.
    Text,
    /// List value rendered as a row of tags.
    TagList,
    /// Boolean rendered as an Active/Inactive style badge.
    StatusBadge,
    /// The synthetic edit/delete actions cell; backed by no field.
    Actions,
}

/// One column of a section's list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub render: CellRender,
}

impl Column {
    #[must_use]
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: CellRender::Text,
        }
    }

    #[must_use]
    pub fn tags(key: &str, label: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: CellRender::TagList,
        }
    }

    #[must_use]
    pub fn status(key: &str, label: &str) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            render: CellRender::StatusBadge,
        }
    }

    /// The synthetic actions pseudo-column.
    #[must_use]
    pub fn actions() -> Self {
        Self {
            key: "actions".into(),
            label: "Actions".into(),
            render: CellRender::Actions,
        }
    }
}

/// Declarative description of one entity type: its editable fields (form
/// order) and its list-view columns (display order, independent of form
/// order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub kind: SectionKind,
    pub fields: Vec<FieldSpec>,
    pub columns: Vec<Column>,
}

impl EntitySchema {
    /// Materializes the complete default field map. Every declared field is
    /// present, so drafts and records never start with holes.
    #[must_use]
    pub fn defaults(&self) -> FieldMap {
        self.fields
            .iter()
            .map(|spec| (spec.name.clone(), spec.default.clone()))
            .collect()
    }

    /// Looks up a field spec by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Column keys that do not name a declared field, the synthetic
    /// `actions` pseudo-column excepted. Empty for a well-formed schema.
    #[must_use]
    pub fn undeclared_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|col| col.render != CellRender::Actions)
            .filter(|col| self.field(&col.key).is_none())
            .map(|col| col.key.as_str())
            .collect()
    }
}
