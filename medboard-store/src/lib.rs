//! In-memory collection stores for MedBoard.
//!
//! One ordered collection per section; insertion order is display order.
//! The contract (`insert` / `update_by_id` / `delete_by_id` / `filter`) is
//! shaped as a drop-in local stand-in for a future keyed persistence
//! backend: nothing here assumes the records live in process memory except
//! the iterator types.

mod collection;
mod error;

pub use collection::{CollectionStore, Collections};
pub use error::{StoreError, StoreResult};
