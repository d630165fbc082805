// crates/native-harness-config/src/properties.rs
// ============================================================================
// Module: Harness Property Tables
// Description: Canonical property layers for native query-runner fixtures.
// Purpose: Keep engine, catalog, shuffle, and function-namespace settings in one place.
// Dependencies: native-harness-core
// ============================================================================

//! ## Overview
//! Each function returns one [`ConfigLayer`]. The harness composes them with
//! environment-derived values at the bottom and caller overrides on top, so
//! a test can always replace any default here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use native_harness_core::ConfigLayer;
use native_harness_core::ShuffleManagerKind;

use crate::ConfigError;
use crate::HarnessConfig;

// ============================================================================
// SECTION: Fixture Constants
// ============================================================================

/// Default catalog of the native fixture.
pub const FIXTURE_CATALOG: &str = "hive";
/// Database provisioned in the fixture metastore.
pub const FIXTURE_DATABASE: &str = "tpch";
/// Owner role of provisioned databases.
pub const DEFAULT_DATABASE_OWNER: &str = "public";
/// Available-parallelism hint handed to the runner.
pub const AVAILABLE_PARALLELISM: usize = 4;
/// Storage format of the reference (non-native) runner.
pub const REFERENCE_STORAGE_FORMAT: &str = "legacy";
/// Prefix of auto-created data directories.
pub const DATA_DIR_PREFIX: &str = "PrestoTest";

// ============================================================================
// SECTION: Property Keys
// ============================================================================

/// Directory holding per-catalog property files of the native worker.
pub const CATALOG_CONFIG_DIR: &str = "catalog.config-dir";
/// Enables native execution in the coordinator.
pub const NATIVE_EXECUTION_ENABLED: &str = "native-execution-enabled";
/// Native worker executable path.
pub const NATIVE_EXECUTION_EXECUTABLE_PATH: &str = "native-execution-executable-path";
/// Initial Spark partition count.
pub const SPARK_INITIAL_PARTITION_COUNT: &str = "spark.initial-partition-count";
/// Registers test-only functions in the worker.
pub const REGISTER_TEST_FUNCTIONS: &str = "register-test-functions";
/// Enables partition count auto-tuning.
pub const SPARK_PARTITION_COUNT_AUTO_TUNE_ENABLED: &str = "spark.partition-count-auto-tune-enabled";
/// Active Spark shuffle manager class.
pub const SPARK_SHUFFLE_MANAGER: &str = "spark.shuffle.manager";
/// Fallback Spark shuffle manager class.
pub const FALLBACK_SPARK_SHUFFLE_MANAGER: &str = "spark.fallback.shuffle.manager";

// ============================================================================
// SECTION: Function Namespace
// ============================================================================

/// Plugin providing function namespace managers.
pub const FUNCTION_NAMESPACE_PLUGIN: &str = "function-namespace-manager";
/// Factory name of the JSON file based function namespace manager.
pub const JSON_FUNCTION_NAMESPACE_FACTORY: &str = "json_file";
/// Catalog the JSON function namespace is registered under.
pub const JSON_FUNCTION_NAMESPACE: &str = "json";
/// Location of external function definitions, relative to the crate under test.
pub const EXTERNAL_FUNCTIONS_PATH: &str = "src/test/resources/external_functions.json";

// ============================================================================
// SECTION: Layers
// ============================================================================

/// Engine properties every native worker fixture starts from.
#[must_use]
pub fn native_worker_system_properties() -> ConfigLayer {
    ConfigLayer::new()
        .with(NATIVE_EXECUTION_ENABLED, "true")
        .with("optimizer.optimize-hash-generation", "false")
        .with("parse-decimal-literals-as-double", "true")
        .with("regex-library", "RE2J")
        .with("offset-clause-enabled", "true")
}

/// Catalog properties for the native worker's hive catalog.
#[must_use]
pub fn native_worker_catalog_properties() -> ConfigLayer {
    ConfigLayer::new()
        .with("hive.storage-format", "DWRF")
        .with("hive.pushdown-filter-enabled", "true")
}

/// Fixture overrides layered on top of the worker system properties.
///
/// Worker configs are generated on the fly, so the config directory points
/// at the filesystem root. When no endpoint override is configured the
/// executable path is required and recorded.
///
/// # Errors
///
/// Returns [`ConfigError::MissingProperty`] when neither a native endpoint
/// nor an executable path is configured.
pub fn fixture_overrides(config: &HarnessConfig) -> Result<ConfigLayer, ConfigError> {
    let mut layer = ConfigLayer::new()
        .with(CATALOG_CONFIG_DIR, "/")
        .with(NATIVE_EXECUTION_ENABLED, "true")
        .with(SPARK_INITIAL_PARTITION_COUNT, "1")
        .with(REGISTER_TEST_FUNCTIONS, "true")
        .with(SPARK_PARTITION_COUNT_AUTO_TUNE_ENABLED, "false");
    if config.native_port.is_none() {
        let path = config.require_executable_path()?;
        layer.insert(NATIVE_EXECUTION_EXECUTABLE_PATH, path.display().to_string());
    }
    Ok(layer)
}

/// Spark properties installing the native-execution shuffle manager.
#[must_use]
pub fn native_shuffle_properties() -> ConfigLayer {
    ConfigLayer::new()
        .with(SPARK_SHUFFLE_MANAGER, ShuffleManagerKind::NativeExecution.class_name())
        .with(FALLBACK_SPARK_SHUFFLE_MANAGER, ShuffleManagerKind::Sort.class_name())
}

/// Properties of the JSON file based function namespace manager.
#[must_use]
pub fn json_function_namespace_properties() -> ConfigLayer {
    ConfigLayer::new()
        .with("supported-function-languages", "CPP")
        .with("function-implementation-type", "CPP")
        .with("json-based-function-manager.path-to-function-definition", EXTERNAL_FUNCTIONS_PATH)
}
