//! Centralized constants for the Cart PayFlow workspace.
//!
//! This module contains the declared package defaults and namespace names
//! used across the resolver to avoid magic value duplication.

// =============================================================================
// Namespaces
// =============================================================================

/// Namespace holding the cart package settings.
pub const NS_CART: &str = "cart";

/// Namespace holding the payment package settings.
pub const NS_PAYMENT: &str = "payment";

/// Namespace holding the integration settings between cart and payment.
pub const NS_INTEGRATION: &str = "integration";

// =============================================================================
// Cart Defaults
// =============================================================================

/// Default tax rate applied to cart totals (0.21 = 21% VAT).
pub const DEFAULT_TAX_RATE: f64 = 0.21;

/// Default ISO 4217 currency code.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Default symbol displayed alongside amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

// =============================================================================
// Payment Defaults
// =============================================================================

/// Default payment gateway identifier.
pub const DEFAULT_PAYMENT_GATEWAY: &str = "redsys";

// =============================================================================
// Integration Defaults
// =============================================================================

/// Whether the cart is cleared after a successful payment.
pub const DEFAULT_AUTO_CLEAR_CART_ON_SUCCESS: bool = true;

/// Whether the cart snapshot is stored with the resulting order.
pub const DEFAULT_STORE_CART_WITH_ORDER: bool = true;
