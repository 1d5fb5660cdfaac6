//! Declared configuration sources.
//!
//! Responsibilities:
//! - Define `ConfigSource`: one package namespace and its declared defaults.
//!
//! Does NOT handle:
//! - Override lookup (see overrides.rs) or merging (see builder.rs).
//!
//! Invariants:
//! - A source is immutable once built; the resolver only reads it.
//! - Keys are unique within a source; re-declaring a key replaces the
//!   earlier default.

use std::collections::BTreeMap;

use crate::types::Value;

/// The default settings declared by one package under a single namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    namespace: String,
    defaults: BTreeMap<String, Value>,
}

impl ConfigSource {
    /// Create an empty source for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            defaults: BTreeMap::new(),
        }
    }

    /// Declare a default value for a key.
    ///
    /// The default's type decides how an override for this key is parsed.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// The namespace this source contributes to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Iterate over the declared keys and their defaults in sorted order.
    pub fn defaults(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Whether the source declares no keys.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_default_replaces_earlier_declaration() {
        let source = ConfigSource::new("cart")
            .with_default("currency", "EUR")
            .with_default("currency", "USD");

        assert_eq!(source.len(), 1);
        let (_, value) = source.defaults().next().unwrap();
        assert_eq!(value, &Value::Str("USD".to_string()));
    }

    #[test]
    fn test_defaults_iterate_in_key_order() {
        let source = ConfigSource::new("cart")
            .with_default("tax_rate", 0.21)
            .with_default("currency", "EUR");

        let keys: Vec<_> = source.defaults().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["currency", "tax_rate"]);
    }
}
