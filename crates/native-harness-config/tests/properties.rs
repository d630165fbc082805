// crates/native-harness-config/tests/properties.rs
// ============================================================================
// Module: Property Table Tests
// Description: Validate fixture property layers and override composition.
// Purpose: Ensure worker wiring keys are present and overrides win.
// ============================================================================

//! Property table tests for native-harness-config.

#![allow(clippy::use_debug, reason = "Test failure messages include debug output.")]

use std::path::PathBuf;

use native_harness_config::ConfigError;
use native_harness_config::HarnessConfig;
use native_harness_config::properties;
use native_harness_core::ConfigLayer;

type TestResult = Result<(), String>;

#[test]
fn spawned_worker_overrides_record_executable_path() -> TestResult {
    let config = HarnessConfig {
        executable_path: Some(PathBuf::from("/opt/presto/presto_server")),
        ..HarnessConfig::default()
    };
    let layer = properties::fixture_overrides(&config).map_err(|err| err.to_string())?;
    if layer.get(properties::NATIVE_EXECUTION_EXECUTABLE_PATH) != Some("/opt/presto/presto_server") {
        return Err(format!("executable path not recorded: {layer:?}"));
    }
    if layer.get(properties::CATALOG_CONFIG_DIR) != Some("/") {
        return Err("catalog config dir must point at the root".to_string());
    }
    Ok(())
}

#[test]
fn endpoint_override_skips_executable_path() -> TestResult {
    let config = HarnessConfig {
        native_port: Some(7777),
        ..HarnessConfig::default()
    };
    let layer = properties::fixture_overrides(&config).map_err(|err| err.to_string())?;
    if layer.get(properties::NATIVE_EXECUTION_EXECUTABLE_PATH).is_some() {
        return Err("executable path must not be set with an endpoint override".to_string());
    }
    Ok(())
}

#[test]
fn missing_executable_without_endpoint_is_fatal() -> TestResult {
    match properties::fixture_overrides(&HarnessConfig::default()) {
        Err(ConfigError::MissingProperty {
            key, ..
        }) if key == "PRESTO_SERVER" => Ok(()),
        other => Err(format!("expected missing PRESTO_SERVER, got {other:?}")),
    }
}

#[test]
fn overrides_take_precedence_over_worker_defaults() -> TestResult {
    let base = properties::native_worker_system_properties();
    let overrides = ConfigLayer::new().with("regex-library", "JONI");
    let composed = ConfigLayer::compose([&base, &overrides]);
    if composed.optional_property("regex-library") != Some("JONI") {
        return Err("caller override must win".to_string());
    }
    if composed.optional_property(properties::NATIVE_EXECUTION_ENABLED) != Some("true") {
        return Err("worker default must survive".to_string());
    }
    Ok(())
}

#[test]
fn shuffle_properties_install_native_manager_with_sort_fallback() -> TestResult {
    let layer = properties::native_shuffle_properties();
    let manager = layer.get(properties::SPARK_SHUFFLE_MANAGER).unwrap_or_default();
    let fallback = layer.get(properties::FALLBACK_SPARK_SHUFFLE_MANAGER).unwrap_or_default();
    if !manager.ends_with("PrestoSparkNativeExecutionShuffleManager") {
        return Err(format!("unexpected shuffle manager {manager}"));
    }
    if !fallback.ends_with("SortShuffleManager") {
        return Err(format!("unexpected fallback manager {fallback}"));
    }
    Ok(())
}

#[test]
fn json_namespace_points_at_external_functions() -> TestResult {
    let layer = properties::json_function_namespace_properties();
    if layer.get("json-based-function-manager.path-to-function-definition")
        != Some(properties::EXTERNAL_FUNCTIONS_PATH)
    {
        return Err("function definition path missing".to_string());
    }
    if layer.get("supported-function-languages") != Some("CPP") {
        return Err("function language must be CPP".to_string());
    }
    Ok(())
}
