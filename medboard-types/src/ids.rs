//! Record identifiers.
//!
//! Identifiers are opaque strings to every other crate; only this module
//! knows the layout: `{entity-singular}_{6-digit time}{3-digit random}`,
//! e.g. `service_483291557`. The time component makes ids roughly sortable
//! by creation order within a session.

use crate::SectionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Unique identifier of a stored record.
///
/// Uniqueness is probabilistic, not guaranteed: two allocations in the same
/// millisecond can collide. The collection store rejects the collision as a
/// duplicate and the caller allocates again — identifiers are never reused
/// and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Allocates a fresh identifier for a record of the given kind.
    #[must_use]
    pub fn allocate(kind: SectionKind) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_millis() as u64;
        let random = (Uuid::new_v4().as_u128() % 1_000) as u64;
        Self(format!(
            "{}_{:06}{:03}",
            kind.singular(),
            millis % 1_000_000,
            random
        ))
    }

    /// Wraps an existing identifier string, e.g. one read back from a
    /// future persistence backend.
    #[must_use]
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
