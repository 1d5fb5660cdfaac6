//! Environment override bindings.
//!
//! Responsibilities:
//! - Define the explicit table mapping configuration keys to the
//!   environment variables allowed to override them.
//!
//! Does NOT handle:
//! - Reading or parsing variable values (see env.rs and builder.rs).
//!
//! Invariants:
//! - At most one variable is bound per (namespace, key) pair; binding the
//!   same key twice replaces the earlier variable.
//! - Unbound keys always resolve to their declared default.

use std::collections::BTreeMap;

/// Table of environment variables allowed to override declared defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideBindings {
    by_namespace: BTreeMap<String, BTreeMap<String, String>>,
}

impl OverrideBindings {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` as the override variable for `namespace.key`.
    pub fn bind(
        mut self,
        var: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.by_namespace
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), var.into());
        self
    }

    /// The variable bound to `namespace.key`, if any.
    pub fn var_for(&self, namespace: &str, key: &str) -> Option<&str> {
        self.by_namespace
            .get(namespace)?
            .get(key)
            .map(String::as_str)
    }

    /// Number of bindings in the table.
    pub fn len(&self) -> usize {
        self.by_namespace.values().map(BTreeMap::len).sum()
    }

    /// Whether the table holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.by_namespace.values().all(BTreeMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let bindings = OverrideBindings::new()
            .bind("CARTIFY_TAX_RATE", "cart", "tax_rate")
            .bind("PAYMENT_GATEWAY_DEFAULT", "payment", "default_gateway");

        assert_eq!(bindings.var_for("cart", "tax_rate"), Some("CARTIFY_TAX_RATE"));
        assert_eq!(bindings.var_for("cart", "currency"), None);
        assert_eq!(bindings.var_for("shipping", "tax_rate"), None);
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_rebinding_replaces_variable() {
        let bindings = OverrideBindings::new()
            .bind("OLD_VAR", "cart", "currency")
            .bind("NEW_VAR", "cart", "currency");

        assert_eq!(bindings.var_for("cart", "currency"), Some("NEW_VAR"));
        assert_eq!(bindings.len(), 1);
    }
}
