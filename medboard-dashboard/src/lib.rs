//! Dashboard controller for MedBoard.
//!
//! The engine's single entry point. A [`Dashboard`] owns the session state
//! (active section, search term, modal) and the per-section collections,
//! and exposes the transitions the console chrome drives:
//! select-section, search, add-new, edit, field edits, submit, cancel and
//! confirmed delete.
//!
//! The controller is a pure state machine: no I/O, no async, no rendering.
//! Every error condition is handled here — validation failures go back to
//! the caller for inline display, stale identifiers degrade to logged
//! no-ops, and allocator collisions are retried. Nothing escapes as a
//! panic.

mod controller;
mod search;
mod state;

pub use controller::Dashboard;
pub use search::record_matches;
pub use state::{DashboardState, ModalMode, ModalSession};
