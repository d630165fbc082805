// crates/native-harness-core/src/core/metastore.rs
// ============================================================================
// Module: Metastore Descriptors
// Description: Database descriptors and request context for metastore calls.
// Purpose: Model the metadata the harness provisions in an external metastore.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Descriptors are what the harness hands to [`crate::interfaces::Metastore`]
//! when provisioning fixture databases. Every call carries the same
//! [`MetastoreContext`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Owner Type
// ============================================================================

/// Principal kind owning a metastore database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerType {
    /// Individual user principal.
    User,
    /// Role principal.
    Role,
}

impl OwnerType {
    /// Returns the stable label for the owner type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Role => "ROLE",
        }
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Database Descriptor
// ============================================================================

/// Metastore database definition.
///
/// # Invariants
/// - `name` is unique within the metastore namespace; the metastore enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    /// Database name.
    pub name: String,
    /// Owning principal name.
    pub owner_name: String,
    /// Owning principal kind.
    pub owner_type: OwnerType,
}

impl DatabaseDescriptor {
    /// Builds a descriptor owned by the given role.
    #[must_use]
    pub fn owned_by_role(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_name: role.into(),
            owner_type: OwnerType::Role,
        }
    }
}

// ============================================================================
// SECTION: Metastore Context
// ============================================================================

/// Caller identity attached to every metastore request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetastoreContext {
    /// User the request runs as.
    pub user: String,
    /// Originating component label.
    pub source: String,
}

impl MetastoreContext {
    /// Creates a context for the given user and source label.
    #[must_use]
    pub fn new(user: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            source: source.into(),
        }
    }

    /// Fixed context used by the harness for fixture provisioning.
    #[must_use]
    pub fn harness() -> Self {
        Self::new("user", "presto-native-harness")
    }
}
