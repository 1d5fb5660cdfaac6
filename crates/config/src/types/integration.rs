//! Integration shim configuration types.
//!
//! These flags describe what should happen after a successful payment. The
//! resolver only carries the values; acting on them is the job of whatever
//! glue sits between the cart and payment packages.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTO_CLEAR_CART_ON_SUCCESS, DEFAULT_STORE_CART_WITH_ORDER};

/// Settings governing the cart/payment handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Clear the cart once a payment succeeds.
    pub auto_clear_cart_on_success: bool,
    /// Persist the cart snapshot together with the resulting order.
    pub store_cart_with_order: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            auto_clear_cart_on_success: DEFAULT_AUTO_CLEAR_CART_ON_SUCCESS,
            store_cart_with_order: DEFAULT_STORE_CART_WITH_ORDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_integration_config() {
        let config = IntegrationConfig::default();
        assert!(config.auto_clear_cart_on_success);
        assert!(config.store_cart_with_order);
    }
}
