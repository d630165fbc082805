// crates/native-harness/src/modules.rs
// ============================================================================
// Module: Execution Module Selection
// Description: Chooses how the query runner reaches its native worker.
// Purpose: Map harness configuration onto execution modules.
// Dependencies: native-harness-core, native-harness-config
// ============================================================================

//! ## Overview
//! Exactly one module is selected. `NATIVE_PORT` wins over `PRESTO_SERVER`.

use native_harness_config::ConfigError;
use native_harness_config::HarnessConfig;
use native_harness_core::ExecutionModule;

/// Selects the execution modules for `config`.
///
/// A configured native endpoint selects the test module pointing at that
/// port; otherwise the production module spawns the configured executable.
///
/// # Errors
///
/// Returns [`ConfigError::MissingProperty`] when no endpoint is configured and
/// the executable path is missing.
pub fn select_execution_modules(
    config: &HarnessConfig,
) -> Result<Vec<ExecutionModule>, ConfigError> {
    let module = match config.native_port {
        Some(port) => ExecutionModule::TestNative {
            port,
        },
        None => ExecutionModule::Native {
            executable_path: config.require_executable_path()?.clone(),
        },
    };
    Ok(vec![module])
}
