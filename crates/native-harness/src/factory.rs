// crates/native-harness/src/factory.rs
// ============================================================================
// Module: Query Runner Factory
// Description: Builds native query runner fixtures from harness configuration.
// Purpose: Wire configuration, data directory, modules, and metastore bootstrap.
// Dependencies: native-harness-core, native-harness-config
// ============================================================================

//! ## Overview
//! The factory is orchestration only. For a native runner it:
//! 1. composes worker system properties with caller overrides on top;
//! 2. resolves the shared base data directory;
//! 3. selects execution modules from the endpoint configuration;
//! 4. builds the runner through the engine's [`QueryRunnerBuilder`];
//! 5. provisions the `tpch` fixture database.
//!
//! The zero-argument entry point additionally registers the JSON function
//! namespace manager on the new runner.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use native_harness_config::HarnessConfig;
use native_harness_config::properties;
use native_harness_core::ConfigLayer;
use native_harness_core::ExecutionModule;
use native_harness_core::HarnessAuditSink;
use native_harness_core::HarnessEvent;
use native_harness_core::QueryRunner;
use native_harness_core::QueryRunnerBuilder;
use native_harness_core::ReferenceRunnerSpec;
use native_harness_core::RunnerSpec;

use crate::DataDirectoryProvider;
use crate::HarnessError;
use crate::NoopAuditSink;
use crate::ShuffleReport;
use crate::VerificationError;
use crate::assert_shuffle_metadata;
use crate::ensure_database;
use crate::modules::select_execution_modules;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Explicit inputs for [`QueryRunnerFactory::create_native_query_runner_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeRunnerOptions {
    /// Base data directory handed to the runner.
    pub base_dir: Option<PathBuf>,
    /// Engine properties layered over the worker system properties.
    pub additional_config: ConfigLayer,
    /// Spark-layer properties (shuffle settings and similar).
    pub additional_spark: ConfigLayer,
    /// Execution modules wiring the native worker.
    pub modules: Vec<ExecutionModule>,
}

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Builds query runner fixtures on top of an engine-provided builder.
pub struct QueryRunnerFactory<B> {
    /// Engine query-runner construction API.
    builder: B,
    /// Base data directory provider.
    data_dir: DataDirectoryProvider,
    /// Audit sink for harness events.
    audit: Arc<dyn HarnessAuditSink>,
}

impl<B: QueryRunnerBuilder> QueryRunnerFactory<B> {
    /// Creates a factory using the process-wide data directory and no auditing.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            data_dir: DataDirectoryProvider::global(),
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn HarnessAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Replaces the data directory provider.
    #[must_use]
    pub fn with_data_directory(mut self, data_dir: DataDirectoryProvider) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Returns the underlying runner builder.
    #[must_use]
    pub const fn builder(&self) -> &B {
        &self.builder
    }

    /// Creates a native runner from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when configuration is invalid, the data
    /// directory cannot be resolved, or the runner cannot be built,
    /// provisioned, or configured.
    pub fn create_native_query_runner(&self) -> Result<B::Runner, HarnessError> {
        let config = HarnessConfig::load()?;
        self.create_native_query_runner_from(&config)
    }

    /// Creates a native runner from an already loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`QueryRunnerFactory::create_native_query_runner`].
    pub fn create_native_query_runner_from(
        &self,
        config: &HarnessConfig,
    ) -> Result<B::Runner, HarnessError> {
        let additional_config = properties::fixture_overrides(config)?;
        let modules = select_execution_modules(config)?;
        let base_dir = self.base_data_path(config)?;
        let runner = self.create_native_query_runner_with(NativeRunnerOptions {
            base_dir: Some(base_dir),
            additional_config,
            additional_spark: properties::native_shuffle_properties(),
            modules,
        })?;
        self.setup_json_function_namespace_manager(&runner)?;
        Ok(runner)
    }

    /// Creates a native runner from explicit options and provisions the
    /// fixture database.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Runner`] when the runner cannot be built and
    /// [`HarnessError::Metastore`] when the fixture database cannot be
    /// provisioned.
    pub fn create_native_query_runner_with(
        &self,
        options: NativeRunnerOptions,
    ) -> Result<B::Runner, HarnessError> {
        let config = ConfigLayer::compose([
            &properties::native_worker_system_properties(),
            &options.additional_config,
        ]);
        let module_labels = options.modules.iter().map(ExecutionModule::label).collect();
        let runner = self.builder.build(RunnerSpec {
            catalog: properties::FIXTURE_CATALOG.to_string(),
            config,
            catalog_properties: properties::native_worker_catalog_properties(),
            spark_properties: options.additional_spark,
            base_dir: options.base_dir,
            modules: options.modules,
            available_parallelism: properties::AVAILABLE_PARALLELISM,
        })?;
        self.audit.record(&HarnessEvent::RunnerCreated {
            catalog: properties::FIXTURE_CATALOG.to_string(),
            modules: module_labels,
        });

        let outcome = ensure_database(runner.metastore(), properties::FIXTURE_DATABASE)?;
        self.audit.record(&HarnessEvent::DatabaseEnsured {
            name: properties::FIXTURE_DATABASE.to_string(),
            created: outcome.created(),
        });
        Ok(runner)
    }

    /// Creates a reference (non-native) runner from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] when configuration is invalid, the data
    /// directory cannot be resolved, or the runner cannot be built.
    pub fn create_java_query_runner(&self) -> Result<B::ReferenceRunner, HarnessError> {
        let config = HarnessConfig::load()?;
        self.create_java_query_runner_from(&config)
    }

    /// Creates a reference runner sharing the native fixture's data directory.
    ///
    /// # Errors
    ///
    /// See [`QueryRunnerFactory::create_java_query_runner`].
    pub fn create_java_query_runner_from(
        &self,
        config: &HarnessConfig,
    ) -> Result<B::ReferenceRunner, HarnessError> {
        let base_dir = self.base_data_path(config)?;
        Ok(self.builder.build_reference(ReferenceRunnerSpec {
            base_dir: Some(base_dir),
            storage_format: properties::REFERENCE_STORAGE_FORMAT.to_string(),
        })?)
    }

    /// Verifies shuffle metadata of `runner` after a workload ran.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] describing the first violation.
    pub fn assert_shuffle_metadata(
        &self,
        runner: &B::Runner,
    ) -> Result<ShuffleReport, VerificationError> {
        let report = assert_shuffle_metadata(runner.execution_environment())?;
        self.audit.record(&HarnessEvent::ShuffleVerified {
            partitions: report.len(),
        });
        Ok(report)
    }

    /// Installs the function namespace plugin and registers the JSON file
    /// based namespace manager.
    fn setup_json_function_namespace_manager(&self, runner: &B::Runner) -> Result<(), HarnessError> {
        runner.install_plugin(properties::FUNCTION_NAMESPACE_PLUGIN)?;
        runner.load_function_namespace_manager(
            properties::JSON_FUNCTION_NAMESPACE_FACTORY,
            properties::JSON_FUNCTION_NAMESPACE,
            &properties::json_function_namespace_properties(),
        )?;
        self.audit.record(&HarnessEvent::FunctionNamespaceLoaded {
            namespace: properties::JSON_FUNCTION_NAMESPACE.to_string(),
        });
        Ok(())
    }

    /// Resolves the base data path, preferring the configured override.
    fn base_data_path(&self, config: &HarnessConfig) -> Result<PathBuf, HarnessError> {
        let override_dir = config.data_dir.clone();
        self.data_dir.get_or_resolve(|| Ok(override_dir), self.audit.as_ref())
    }
}
