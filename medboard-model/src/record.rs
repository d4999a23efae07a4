use medboard_types::{RecordId, SectionKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name → value map backing a record or a form draft.
pub type FieldMap = Map<String, Value>;

/// A stored entry in one of the console's collections.
///
/// `fields` holds JSON whose shape is declared by the section's
/// [`EntitySchema`](crate::EntitySchema). The identifier lives outside the
/// field map and is immutable once assigned. Cloning a record is a
/// structural deep copy; the form layer relies on this when it detaches a
/// draft from the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub kind: SectionKind,
    pub fields: FieldMap,
}

impl Record {
    #[must_use]
    pub fn new(id: RecordId, kind: SectionKind, fields: FieldMap) -> Self {
        Self { id, kind, fields }
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Extracts a string field.
    #[must_use]
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Extracts a boolean field.
    #[must_use]
    pub fn field_bool(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(Value::as_bool)
    }
}
