//! The resolved configuration handed to consumers.
//!
//! Responsibilities:
//! - Store the final namespace -> key -> value mapping.
//! - Expose per-namespace views so each package reads only its own settings.
//! - Extract the typed `CartConfig`/`PaymentConfig`/`IntegrationConfig`
//!   structs from the resolved values.
//!
//! Does NOT handle:
//! - Resolution or override precedence (see builder.rs).
//!
//! Invariants:
//! - Never mutated after construction; a reload builds a brand-new value
//!   and swaps the reference held by consumers.
//! - Equality is value equality, so resolving identical inputs twice yields
//!   equal configs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::{NS_CART, NS_INTEGRATION, NS_PAYMENT};
use crate::types::{CartConfig, IntegrationConfig, PaymentConfig, Value, ValueKind};

use super::error::ConfigError;

/// The fully-resolved, read-only configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedConfig {
    namespaces: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MergedConfig {
    pub(crate) fn new(namespaces: BTreeMap<String, BTreeMap<String, Value>>) -> Self {
        Self { namespaces }
    }

    /// The settings of one namespace, if it was declared.
    pub fn namespace(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.namespaces.get(name)
    }

    /// A single resolved value.
    pub fn get(&self, namespace: &str, key: &str) -> Option<&Value> {
        self.namespaces.get(namespace)?.get(key)
    }

    /// Iterate over the declared namespace names in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// The typed cart settings.
    pub fn cart(&self) -> Result<CartConfig, ConfigError> {
        Ok(CartConfig {
            tax_rate: self.require_float(NS_CART, "tax_rate")?,
            currency: self.require_str(NS_CART, "currency")?.to_string(),
            currency_symbol: self.require_str(NS_CART, "currency_symbol")?.to_string(),
        })
    }

    /// The typed payment settings.
    pub fn payment(&self) -> Result<PaymentConfig, ConfigError> {
        Ok(PaymentConfig {
            default_gateway: self.require_str(NS_PAYMENT, "default_gateway")?.to_string(),
        })
    }

    /// The typed integration settings.
    pub fn integration(&self) -> Result<IntegrationConfig, ConfigError> {
        Ok(IntegrationConfig {
            auto_clear_cart_on_success: self
                .require_bool(NS_INTEGRATION, "auto_clear_cart_on_success")?,
            store_cart_with_order: self.require_bool(NS_INTEGRATION, "store_cart_with_order")?,
        })
    }

    fn require(&self, namespace: &str, key: &str) -> Result<&Value, ConfigError> {
        self.get(namespace, key)
            .ok_or_else(|| ConfigError::MissingKey {
                namespace: namespace.to_string(),
                key: key.to_string(),
            })
    }

    fn require_str(&self, namespace: &str, key: &str) -> Result<&str, ConfigError> {
        self.require(namespace, key)?
            .as_str()
            .ok_or_else(|| mismatch(namespace, key, ValueKind::Str))
    }

    fn require_float(&self, namespace: &str, key: &str) -> Result<f64, ConfigError> {
        self.require(namespace, key)?
            .as_f64()
            .ok_or_else(|| mismatch(namespace, key, ValueKind::Float))
    }

    fn require_bool(&self, namespace: &str, key: &str) -> Result<bool, ConfigError> {
        self.require(namespace, key)?
            .as_bool()
            .ok_or_else(|| mismatch(namespace, key, ValueKind::Bool))
    }
}

fn mismatch(namespace: &str, key: &str, expected: ValueKind) -> ConfigError {
    ConfigError::TypeMismatch {
        namespace: namespace.to_string(),
        key: key.to_string(),
        expected,
    }
}
