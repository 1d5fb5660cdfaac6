//! Configuration management for the Cart PayFlow integration.
//!
//! This crate provides the layered resolver that merges the default settings
//! declared by the cart and payment packages (plus the integration shim's
//! own settings) with environment variable overrides, producing one frozen
//! [`MergedConfig`] for the rest of the application.
//!
//! Resolution happens once at startup and the result is passed explicitly to
//! consumers; there is no process-wide configuration store:
//!
//! ```no_run
//! use cartflow_config::Resolver;
//!
//! # fn main() -> Result<(), cartflow_config::ConfigError> {
//! let config = Resolver::with_package_defaults()
//!     .load_dotenv()?
//!     .resolve_from_process_env()?;
//!
//! let cart = config.cart()?;
//! let payment = config.payment()?;
//! # let _ = (cart, payment);
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigSource, EnvSnapshot, MergedConfig, OverrideBindings, Resolver,
    env_var_or_none,
};
pub use types::{CartConfig, IntegrationConfig, PaymentConfig, Value, ValueKind};
