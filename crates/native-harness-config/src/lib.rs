// crates/native-harness-config/src/lib.rs
// ============================================================================
// Module: Native Harness Config
// Description: Environment configuration and property tables for the harness.
// Purpose: Centralize every configuration input the fixture bootstrap consumes.
// Dependencies: native-harness-core, thiserror
// ============================================================================

//! ## Overview
//! Harness configuration comes from two places: environment variables that
//! select how the native worker is reached and where data lives
//! ([`HarnessConfig`]), and fixed property tables that seed the engine,
//! catalog, and shuffle layers ([`properties`]). Environment parsing is
//! strict: invalid UTF-8 and malformed ports fail closed, while empty values
//! are treated as unset.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;
mod error;
pub mod properties;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod env_tests;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::HarnessConfig;
pub use env::HarnessEnv;
pub use env::read_env_optional;
pub use env::read_env_strict;
pub use error::ConfigError;
