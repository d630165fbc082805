// crates/native-harness/src/metastore.rs
// ============================================================================
// Module: Metastore Bootstrap
// Description: Idempotent provisioning of fixture databases.
// Purpose: Guarantee a named database exists without creating duplicates.
// Dependencies: native-harness-core, native-harness-config
// ============================================================================

//! ## Overview
//! Fixture metastores may persist across test runs, so provisioning must be
//! repeatable: look the database up, create it when absent, and accept an
//! "already exists" answer from create as success (another creator won the
//! race). Every other metastore failure aborts setup.

// ============================================================================
// SECTION: Imports
// ============================================================================

use native_harness_config::properties::DEFAULT_DATABASE_OWNER;
use native_harness_core::DatabaseDescriptor;
use native_harness_core::Metastore;
use native_harness_core::MetastoreContext;
use native_harness_core::MetastoreError;

use crate::HarnessError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result of [`ensure_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// This call created the database.
    Created,
    /// The database already existed.
    AlreadyPresent,
}

impl BootstrapOutcome {
    /// Returns true when this call created the database.
    #[must_use]
    pub const fn created(self) -> bool {
        matches!(self, Self::Created)
    }
}

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

/// Ensures a database named `name` exists in `metastore`.
///
/// Missing databases are created owned by the `public` role.
///
/// # Errors
///
/// Returns [`HarnessError::Metastore`] when the lookup fails or creation fails
/// for any reason other than the database already existing.
pub fn ensure_database(
    metastore: &dyn Metastore,
    name: &str,
) -> Result<BootstrapOutcome, HarnessError> {
    let ctx = MetastoreContext::harness();
    let fatal = |source| HarnessError::Metastore {
        database: name.to_string(),
        source,
    };

    if metastore.get_database(&ctx, name).map_err(fatal)?.is_some() {
        return Ok(BootstrapOutcome::AlreadyPresent);
    }
    let descriptor = DatabaseDescriptor::owned_by_role(name, DEFAULT_DATABASE_OWNER);
    match metastore.create_database(&ctx, &descriptor) {
        Ok(()) => Ok(BootstrapOutcome::Created),
        Err(MetastoreError::AlreadyExists {
            ..
        }) => Ok(BootstrapOutcome::AlreadyPresent),
        Err(source) => Err(fatal(source)),
    }
}
