//! The fixed set of entity collections the admin console manages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lookup on a tag outside the recognized set.
///
/// The set of sections is closed, so hitting this from engine code is a
/// programmer error; it exists so the string boundary fails loudly instead
/// of silently defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity type: {0}")]
pub struct UnknownEntityType(pub String);

/// One of the six entity collections.
///
/// Every schema, collection store and dashboard section is keyed by a
/// `SectionKind`. Adding a section means adding a variant here and a schema
/// in the registry — no new control flow anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Service,
    Hospital,
    Doctor,
    Department,
    User,
    Package,
}

impl SectionKind {
    /// All sections, in declaration order. Indexable by `kind as usize`.
    pub const ALL: [Self; 6] = [
        Self::Service,
        Self::Hospital,
        Self::Doctor,
        Self::Department,
        Self::User,
        Self::Package,
    ];

    /// Singular name, used as the identifier prefix and in modal titles.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Hospital => "hospital",
            Self::Doctor => "doctor",
            Self::Department => "department",
            Self::User => "user",
            Self::Package => "package",
        }
    }

    /// Plural tag, used by the navigation boundary to address sections.
    #[must_use]
    pub const fn section_tag(self) -> &'static str {
        match self {
            Self::Service => "services",
            Self::Hospital => "hospitals",
            Self::Doctor => "doctors",
            Self::Department => "departments",
            Self::User => "users",
            Self::Package => "packages",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for SectionKind {
    type Err = UnknownEntityType;

    /// Accepts both the singular entity-type name and the plural section tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" | "services" => Ok(Self::Service),
            "hospital" | "hospitals" => Ok(Self::Hospital),
            "doctor" | "doctors" => Ok(Self::Doctor),
            "department" | "departments" => Ok(Self::Department),
            "user" | "users" => Ok(Self::User),
            "package" | "packages" => Ok(Self::Package),
            other => Err(UnknownEntityType(other.to_string())),
        }
    }
}
