// crates/native-harness-config/src/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for the native harness.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed. Empty or whitespace-only
//! values are treated exactly like unset variables.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use crate::ConfigError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Port of a pre-existing native worker; selects the test module.
    NativePort,
    /// Path to the native worker executable.
    PrestoServer,
    /// Base data directory override.
    DataDir,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NativePort => "NATIVE_PORT",
            Self::PrestoServer => "PRESTO_SERVER",
            Self::DataDir => "DATA_DIR",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    /// Port of a pre-existing native worker.
    pub native_port: Option<u16>,
    /// Native worker executable path.
    pub executable_path: Option<PathBuf>,
    /// Base data directory override.
    pub data_dir: Option<PathBuf>,
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8 or the
    /// port override is not a port number.
    pub fn load() -> Result<Self, ConfigError> {
        let native_port = read_env_optional(HarnessEnv::NativePort.as_str())?
            .map(|value| parse_port(HarnessEnv::NativePort.as_str(), &value))
            .transpose()?;
        let executable_path =
            read_env_optional(HarnessEnv::PrestoServer.as_str())?.map(PathBuf::from);
        let data_dir = read_env_optional(HarnessEnv::DataDir.as_str())?.map(PathBuf::from);
        Ok(Self {
            native_port,
            executable_path,
            data_dir,
        })
    }

    /// Returns the executable path, failing when it is required but unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProperty`] when no executable path is
    /// configured.
    pub fn require_executable_path(&self) -> Result<&PathBuf, ConfigError> {
        self.executable_path.as_ref().ok_or_else(|| ConfigError::MissingProperty {
            key: HarnessEnv::PrestoServer.as_str().to_string(),
            hint: format!(
                "native worker binary path is missing; set {}=/path/to/native/process/bin",
                HarnessEnv::PrestoServer.as_str()
            ),
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::InvalidUtf8 {
            name: name.to_string(),
        })
    })
}

/// Reads an environment variable, treating empty or whitespace values as unset.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_optional(name: &str) -> Result<Option<String>, ConfigError> {
    Ok(read_env_strict(name)?.filter(|value| !value.trim().is_empty()))
}

/// Parses a non-zero TCP port from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is non-numeric, out of range, or zero.
fn parse_port(name: &str, raw: &str) -> Result<u16, ConfigError> {
    let invalid = || ConfigError::InvalidPort {
        name: name.to_string(),
        value: raw.to_string(),
    };
    let port: u16 = raw.trim().parse().map_err(|_| invalid())?;
    if port == 0 {
        return Err(invalid());
    }
    Ok(port)
}
