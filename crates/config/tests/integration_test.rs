//! Integration tests for configuration resolution through the public API.
//!
//! These tests verify end-to-end resolution behavior the way an application
//! startup path would drive it: wire the package defaults, resolve against
//! an environment snapshot, and hand the frozen config to consumers.

use cartflow_config::{
    CartConfig, ConfigError, ConfigSource, EnvSnapshot, IntegrationConfig, OverrideBindings,
    PaymentConfig, Resolver, Value, env_var_or_none,
};

/// End-to-end: empty environment resolves to the declared defaults,
/// unchanged, across all three namespaces.
#[test]
fn test_defaults_end_to_end() {
    let config = Resolver::with_package_defaults()
        .resolve(&EnvSnapshot::empty())
        .expect("defaults should resolve");

    assert_eq!(
        config.cart().unwrap(),
        CartConfig {
            tax_rate: 0.21,
            currency: "EUR".to_string(),
            currency_symbol: "€".to_string(),
        }
    );
    assert_eq!(
        config.payment().unwrap(),
        PaymentConfig {
            default_gateway: "redsys".to_string(),
        }
    );
    assert_eq!(
        config.integration().unwrap(),
        IntegrationConfig {
            auto_clear_cart_on_success: true,
            store_cart_with_order: true,
        }
    );
}

/// End-to-end: a single gateway override changes exactly one value.
#[test]
fn test_gateway_override_end_to_end() {
    let env = EnvSnapshot::from_pairs([("PAYMENT_GATEWAY_DEFAULT", "stripe")]);
    let config = Resolver::with_package_defaults().resolve(&env).unwrap();

    assert_eq!(config.payment().unwrap().default_gateway, "stripe");
    assert_eq!(config.cart().unwrap(), CartConfig::default());
    assert_eq!(config.integration().unwrap(), IntegrationConfig::default());
}

/// Resolving twice with identical inputs yields value-equal configs.
#[test]
fn test_resolution_idempotence() {
    let resolver = Resolver::with_package_defaults();
    let env = EnvSnapshot::from_pairs([
        ("CARTIFY_TAX_RATE", "0.07"),
        ("AUTO_CLEAR_CART_ON_SUCCESS", "false"),
    ]);

    assert_eq!(resolver.resolve(&env).unwrap(), resolver.resolve(&env).unwrap());
}

/// Duplicate namespaces abort with an error, never a partial config.
#[test]
fn test_duplicate_namespace_returns_error() {
    let result = Resolver::new()
        .with_source(ConfigSource::new("cart").with_default("tax_rate", 0.21))
        .with_source(ConfigSource::new("cart").with_default("tax_rate", 0.10))
        .resolve(&EnvSnapshot::empty());

    assert!(matches!(
        result,
        Err(ConfigError::DuplicateNamespace { .. })
    ));
}

/// The resolved config serializes as plain nested JSON scalars.
#[test]
fn test_merged_config_serializes_as_plain_json() {
    let config = Resolver::with_package_defaults()
        .resolve(&EnvSnapshot::empty())
        .unwrap();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["namespaces"]["cart"]["tax_rate"], 0.21);
    assert_eq!(json["namespaces"]["cart"]["currency"], "EUR");
    assert_eq!(json["namespaces"]["payment"]["default_gateway"], "redsys");
    assert_eq!(
        json["namespaces"]["integration"]["auto_clear_cart_on_success"],
        true
    );
}

/// A custom source and binding resolve alongside the package defaults.
#[test]
fn test_custom_namespace_alongside_packages() {
    let env = EnvSnapshot::from_pairs([("SHIPPING_CARRIER", "dhl")]);
    let config = Resolver::with_package_defaults()
        .with_source(
            ConfigSource::new("shipping")
                .with_default("carrier", "ups")
                .with_default("flat_rate", 4.95),
        )
        .with_overrides(
            OverrideBindings::new()
                .bind("PAYMENT_GATEWAY_DEFAULT", "payment", "default_gateway")
                .bind("SHIPPING_CARRIER", "shipping", "carrier"),
        )
        .resolve(&env)
        .unwrap();

    assert_eq!(
        config.get("shipping", "carrier"),
        Some(&Value::Str("dhl".to_string()))
    );
    assert_eq!(
        config.get("shipping", "flat_rate"),
        Some(&Value::Float(4.95))
    );
    // Package namespaces are still present with their defaults.
    assert_eq!(config.payment().unwrap().default_gateway, "redsys");
}

/// env_var_or_none is exported and callable from the crate root.
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("PAYMENT_GATEWAY_DEFAULT");
}
