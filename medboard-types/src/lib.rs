//! Core type definitions for MedBoard.
//!
//! Defines the universal types every MedBoard subsystem depends on:
//! - [`SectionKind`] — the closed set of managed entity collections
//! - [`RecordId`] — opaque record identifier, plus allocation of fresh ones
//!
//! These types are consumed by the model, store, form and dashboard crates.
//! They carry no behavior beyond identity and naming.

mod ids;
mod section;

pub use ids::RecordId;
pub use section::{SectionKind, UnknownEntityType};
