// crates/native-harness-config/src/env_tests.rs
// ============================================================================
// Module: Harness Env Unit Tests
// Description: Unit coverage for strict environment parsing.
// Purpose: Ensure configuration parsing fails closed on invalid inputs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Unit coverage for strict environment parsing in the harness.
//! Invariants:
//! - Invalid ports are rejected.
//! - Empty values behave like unset variables.
//! - Tests restore environment state after each run.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

use super::ConfigError;
use super::HarnessConfig;
use super::HarnessEnv;

mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub fn set_var(key: &str, value: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned")
}

struct EnvGuard {
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn clean() -> Self {
        let names = [
            HarnessEnv::NativePort.as_str(),
            HarnessEnv::PrestoServer.as_str(),
            HarnessEnv::DataDir.as_str(),
        ];
        let entries = names.iter().map(|name| (*name, std::env::var(*name).ok())).collect();
        for name in names {
            env_mut::remove_var(name);
        }
        Self {
            entries,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}

#[test]
fn unset_environment_loads_defaults() {
    let _lock = env_lock();
    let _guard = EnvGuard::clean();

    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn native_port_accepts_valid_ports() {
    let _lock = env_lock();
    let _guard = EnvGuard::clean();

    env_mut::set_var(HarnessEnv::NativePort.as_str(), " 7777 ");
    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config.native_port, Some(7777));
}

#[test]
fn native_port_rejects_invalid_values() {
    let _lock = env_lock();
    let _guard = EnvGuard::clean();

    for value in ["0", "65536", "not-a-port", "-1"] {
        env_mut::set_var(HarnessEnv::NativePort.as_str(), value);
        let err = HarnessConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "{value} should be rejected");
    }
}

#[test]
fn empty_values_are_treated_as_unset() {
    let _lock = env_lock();
    let _guard = EnvGuard::clean();

    env_mut::set_var(HarnessEnv::DataDir.as_str(), "");
    env_mut::set_var(HarnessEnv::PrestoServer.as_str(), "   ");
    env_mut::set_var(HarnessEnv::NativePort.as_str(), "");
    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn paths_are_read_verbatim() {
    let _lock = env_lock();
    let _guard = EnvGuard::clean();

    env_mut::set_var(HarnessEnv::PrestoServer.as_str(), "/opt/presto/bin/presto_server");
    env_mut::set_var(HarnessEnv::DataDir.as_str(), "/var/tmp/presto-data");
    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config.executable_path, Some(PathBuf::from("/opt/presto/bin/presto_server")));
    assert_eq!(config.data_dir, Some(PathBuf::from("/var/tmp/presto-data")));
}

#[test]
fn missing_executable_names_the_variable() {
    let err = HarnessConfig::default().require_executable_path().unwrap_err();
    assert!(err.to_string().contains("PRESTO_SERVER"));
}
