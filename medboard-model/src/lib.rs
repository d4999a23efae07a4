//! Entity model for MedBoard.
//!
//! Defines the types the CRUD engine is parameterized by:
//! - [`Record`] — the generic data container (id, section, JSON field map)
//! - [`EntitySchema`] — declares a section's editable fields and list columns
//! - [`SchemaRegistry`] — the static catalog, one schema per [`SectionKind`]
//!
//! Rendering, editing and storage are all driven by `EntitySchema` data;
//! none of the downstream crates branch on a concrete section.
//!
//! [`SectionKind`]: medboard_types::SectionKind

mod record;
mod registry;
mod schema;

pub use record::{FieldMap, Record};
pub use registry::{DEPARTMENT_OPTIONS, PRIME_OPTIONS, SchemaRegistry};
pub use schema::{CellRender, Column, EntitySchema, FieldKind, FieldSpec};
