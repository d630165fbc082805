// crates/native-harness/tests/helpers/mod.rs
// ============================================================================
// Module: Native Harness Test Helpers
// Description: In-memory query runner and builder for harness tests.
// Purpose: Capture what the factory hands to the engine without starting one.
// Dependencies: native-harness-core
// ============================================================================

//! ## Overview
//! [`RecordingBuilder`] implements the engine construction API on top of the
//! in-memory collaborators. It records every runner spec it receives and
//! shares one metastore across runners, mimicking a metastore that persists
//! across fixtures in a test session.

#![allow(
    dead_code,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Shared helpers are reused across multiple test suites."
)]

pub mod env;

use std::sync::Arc;
use std::sync::Mutex;

use native_harness_core::ConfigLayer;
use native_harness_core::ExecutionEnvironment;
use native_harness_core::Metastore;
use native_harness_core::QueryRunner;
use native_harness_core::QueryRunnerBuilder;
use native_harness_core::ReferenceRunnerSpec;
use native_harness_core::RunnerError;
use native_harness_core::RunnerSpec;
use native_harness_core::runtime::InMemoryMetastore;
use native_harness_core::runtime::InMemoryShuffleManager;
use native_harness_core::runtime::StaticExecutionEnvironment;

/// Function namespace registration captured by [`FakeRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRegistration {
    pub factory: String,
    pub namespace: String,
    pub properties: ConfigLayer,
}

/// Query runner backed by in-memory collaborators.
pub struct FakeRunner {
    pub spec: RunnerSpec,
    metastore: Arc<InMemoryMetastore>,
    environment: StaticExecutionEnvironment,
    plugins: Mutex<Vec<String>>,
    namespaces: Mutex<Vec<NamespaceRegistration>>,
}

impl FakeRunner {
    pub fn plugins(&self) -> Vec<String> {
        self.plugins.lock().expect("plugins lock").clone()
    }

    pub fn namespaces(&self) -> Vec<NamespaceRegistration> {
        self.namespaces.lock().expect("namespaces lock").clone()
    }
}

impl QueryRunner for FakeRunner {
    fn metastore(&self) -> &dyn Metastore {
        self.metastore.as_ref()
    }

    fn execution_environment(&self) -> &dyn ExecutionEnvironment {
        &self.environment
    }

    fn install_plugin(&self, plugin: &str) -> Result<(), RunnerError> {
        self.plugins.lock().expect("plugins lock").push(plugin.to_string());
        Ok(())
    }

    fn load_function_namespace_manager(
        &self,
        factory: &str,
        namespace: &str,
        properties: &ConfigLayer,
    ) -> Result<(), RunnerError> {
        if !self.plugins().iter().any(|plugin| plugin == "function-namespace-manager") {
            return Err(RunnerError::Plugin(format!("no plugin provides factory {factory}")));
        }
        self.namespaces.lock().expect("namespaces lock").push(NamespaceRegistration {
            factory: factory.to_string(),
            namespace: namespace.to_string(),
            properties: properties.clone(),
        });
        Ok(())
    }
}

/// Reference runner capturing its construction inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeReferenceRunner {
    pub spec: ReferenceRunnerSpec,
}

/// Builder recording runner specs and sharing one metastore.
pub struct RecordingBuilder {
    pub metastore: Arc<InMemoryMetastore>,
    shuffle_manager: Option<InMemoryShuffleManager>,
    failure: Option<RunnerError>,
    specs: Mutex<Vec<RunnerSpec>>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::with_metastore(Arc::new(InMemoryMetastore::new()))
    }

    pub fn with_metastore(metastore: Arc<InMemoryMetastore>) -> Self {
        Self {
            metastore,
            shuffle_manager: None,
            failure: None,
            specs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_shuffle_manager(mut self, manager: InMemoryShuffleManager) -> Self {
        self.shuffle_manager = Some(manager);
        self
    }

    pub fn failing(mut self, error: RunnerError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn specs(&self) -> Vec<RunnerSpec> {
        self.specs.lock().expect("specs lock").clone()
    }
}

impl QueryRunnerBuilder for RecordingBuilder {
    type Runner = FakeRunner;
    type ReferenceRunner = FakeReferenceRunner;

    fn build(&self, spec: RunnerSpec) -> Result<Self::Runner, RunnerError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.specs.lock().expect("specs lock").push(spec.clone());
        let environment = self.shuffle_manager.clone().map_or_else(
            StaticExecutionEnvironment::empty,
            StaticExecutionEnvironment::with_shuffle_manager,
        );
        Ok(FakeRunner {
            spec,
            metastore: Arc::clone(&self.metastore),
            environment,
            plugins: Mutex::new(Vec::new()),
            namespaces: Mutex::new(Vec::new()),
        })
    }

    fn build_reference(
        &self,
        spec: ReferenceRunnerSpec,
    ) -> Result<Self::ReferenceRunner, RunnerError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(FakeReferenceRunner {
            spec,
        })
    }
}
