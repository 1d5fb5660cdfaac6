//! Payment package configuration types.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAYMENT_GATEWAY;

/// Settings read by the payment package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Identifier of the gateway used when a charge does not name one.
    pub default_gateway: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            default_gateway: DEFAULT_PAYMENT_GATEWAY.to_string(),
        }
    }
}
