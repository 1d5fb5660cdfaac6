//! Declared package defaults and override bindings.
//!
//! Responsibilities:
//! - Declare the cart, payment, and integration sources with their defaults.
//! - Declare which environment variable overrides each key.
//!
//! Does NOT handle:
//! - Reading the environment or parsing overrides (see env.rs/builder.rs).
//!
//! Invariants:
//! - Default values come from `constants`, not magic values.
//! - Every binding targets a key declared by one of the package sources.

use crate::constants::{
    DEFAULT_AUTO_CLEAR_CART_ON_SUCCESS, DEFAULT_CURRENCY, DEFAULT_CURRENCY_SYMBOL,
    DEFAULT_PAYMENT_GATEWAY, DEFAULT_STORE_CART_WITH_ORDER, DEFAULT_TAX_RATE, NS_CART,
    NS_INTEGRATION, NS_PAYMENT,
};

use super::overrides::OverrideBindings;
use super::source::ConfigSource;

/// The source declared by the cart package.
pub(crate) fn cart_source() -> ConfigSource {
    ConfigSource::new(NS_CART)
        .with_default("tax_rate", DEFAULT_TAX_RATE)
        .with_default("currency", DEFAULT_CURRENCY)
        .with_default("currency_symbol", DEFAULT_CURRENCY_SYMBOL)
}

/// The source declared by the payment package.
pub(crate) fn payment_source() -> ConfigSource {
    ConfigSource::new(NS_PAYMENT).with_default("default_gateway", DEFAULT_PAYMENT_GATEWAY)
}

/// The source declared by the integration shim itself.
pub(crate) fn integration_source() -> ConfigSource {
    ConfigSource::new(NS_INTEGRATION)
        .with_default(
            "auto_clear_cart_on_success",
            DEFAULT_AUTO_CLEAR_CART_ON_SUCCESS,
        )
        .with_default("store_cart_with_order", DEFAULT_STORE_CART_WITH_ORDER)
}

/// The override table for the declared package sources.
pub(crate) fn package_overrides() -> OverrideBindings {
    OverrideBindings::new()
        .bind("CARTIFY_TAX_RATE", NS_CART, "tax_rate")
        .bind("CARTIFY_CURRENCY", NS_CART, "currency")
        .bind("CARTIFY_CURRENCY_SYMBOL", NS_CART, "currency_symbol")
        .bind("PAYMENT_GATEWAY_DEFAULT", NS_PAYMENT, "default_gateway")
        .bind(
            "AUTO_CLEAR_CART_ON_SUCCESS",
            NS_INTEGRATION,
            "auto_clear_cart_on_success",
        )
        .bind("STORE_CART_WITH_ORDER", NS_INTEGRATION, "store_cart_with_order")
}
