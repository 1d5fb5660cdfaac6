//! Configuration resolver builder implementation.
//!
//! Responsibilities:
//! - Provide the builder-pattern `Resolver` composing sources and overrides.
//! - Perform the single-pass merge producing the final `MergedConfig`.
//!
//! Does NOT handle:
//! - Environment snapshotting details (delegated to env.rs).
//! - The declared package defaults (see defaults.rs).
//!
//! Invariants / Assumptions:
//! - Environment overrides take precedence over declared defaults.
//! - Resolution fails closed on unparseable overrides unless lenient mode
//!   was explicitly enabled.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::types::Value;

use super::defaults::{cart_source, integration_source, package_overrides, payment_source};
use super::env::EnvSnapshot;
use super::error::ConfigError;
use super::merged::MergedConfig;
use super::overrides::OverrideBindings;
use super::source::ConfigSource;

/// Resolver that merges declared sources with environment overrides.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    sources: Vec<ConfigSource>,
    overrides: OverrideBindings,
    lenient: bool,
}

impl Resolver {
    /// Create a resolver with no sources and no override bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver pre-wired with the cart, payment, and integration
    /// package sources and their override bindings.
    ///
    /// This is the startup entry point equivalent to registering both
    /// packages and merging their configuration in one place.
    pub fn with_package_defaults() -> Self {
        Self::new()
            .with_source(cart_source())
            .with_source(payment_source())
            .with_source(integration_source())
            .with_overrides(package_overrides())
    }

    /// Add a configuration source.
    ///
    /// Namespace uniqueness is checked during `resolve`, not here, so a
    /// duplicate aborts resolution instead of silently replacing a source.
    pub fn with_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the override table.
    pub fn with_overrides(mut self, overrides: OverrideBindings) -> Self {
        self.overrides = overrides;
        self
    }

    /// Enable or disable lenient override handling.
    ///
    /// In lenient mode an unparseable override falls back to the declared
    /// default and emits a warning instead of aborting resolution. Strict
    /// handling is the default.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Resolve against a captured environment snapshot.
    ///
    /// Pure and idempotent: the same resolver and snapshot always produce a
    /// value-equal `MergedConfig`, and neither input is mutated. Fails with
    /// `DuplicateNamespace` before any partial result when two sources share
    /// a namespace.
    pub fn resolve(&self, env: &EnvSnapshot) -> Result<MergedConfig, ConfigError> {
        let mut namespaces: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();

        for source in &self.sources {
            if namespaces.contains_key(source.namespace()) {
                return Err(ConfigError::DuplicateNamespace {
                    namespace: source.namespace().to_string(),
                });
            }

            let mut resolved = BTreeMap::new();
            for (key, default) in source.defaults() {
                let value = self.resolve_key(source.namespace(), key, default, env)?;
                resolved.insert(key.to_string(), value);
            }
            namespaces.insert(source.namespace().to_string(), resolved);
        }

        debug!(namespaces = namespaces.len(), "configuration resolved");
        Ok(MergedConfig::new(namespaces))
    }

    /// Snapshot the process environment and resolve against it.
    pub fn resolve_from_process_env(&self) -> Result<MergedConfig, ConfigError> {
        self.resolve(&EnvSnapshot::from_process())
    }

    /// Resolve a single key, applying the bound override if its variable is
    /// set in the snapshot.
    fn resolve_key(
        &self,
        namespace: &str,
        key: &str,
        default: &Value,
        env: &EnvSnapshot,
    ) -> Result<Value, ConfigError> {
        let Some(var) = self.overrides.var_for(namespace, key) else {
            return Ok(default.clone());
        };
        let Some(raw) = env.get(var) else {
            return Ok(default.clone());
        };

        let expected = default.kind();
        match expected.parse(raw) {
            Some(value) => Ok(value),
            None if self.lenient => {
                warn!(
                    var,
                    namespace,
                    key,
                    expected = %expected,
                    "ignoring unparseable override, keeping declared default"
                );
                Ok(default.clone())
            }
            None => Err(ConfigError::InvalidOverrideValue {
                var: var.to_string(),
                key: format!("{namespace}.{key}"),
                value: raw.to_string(),
                expected,
            }),
        }
    }
}
