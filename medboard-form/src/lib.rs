//! Schema-driven form layer for MedBoard.
//!
//! One generic form, parameterized by [`EntitySchema`] data — no per-section
//! form code anywhere:
//! - [`FieldWidget`] / [`render_field`] — pure view-models the modal chrome
//!   renders; the engine needs no rendering environment
//! - [`FieldInput`] / [`apply_input`] — edit capture per field kind
//! - [`FormDraft`] — the transient, uncommitted copy of a record under edit
//!
//! A draft never aliases a stored record: opening for edit takes a
//! structural clone, and nothing is written back until submit.
//!
//! [`EntitySchema`]: medboard_model::EntitySchema

mod draft;
mod error;
mod field;

pub use draft::FormDraft;
pub use error::{FormError, FormResult};
pub use field::{FieldInput, FieldWidget, OptionItem, apply_input, render_field};
