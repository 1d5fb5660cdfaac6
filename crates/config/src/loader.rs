//! Configuration resolver for package defaults and environment overrides.
//!
//! Responsibilities:
//! - Merge the default settings declared by each package namespace.
//! - Apply environment variable overrides through an explicit typed table.
//! - Build the final immutable `MergedConfig` handed to consumers.
//!
//! Does NOT handle:
//! - Package business logic (pricing, gateway calls); packages only read
//!   their own namespace from the resolved config.
//!
//! Invariants / Assumptions:
//! - Environment overrides take precedence over declared defaults.
//! - Resolution happens once at startup; the result is never mutated.
//!   A reload builds a brand-new `MergedConfig` and swaps the reference.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.

mod builder;
mod defaults;
mod env;
mod error;
mod merged;
mod overrides;
mod source;

#[cfg(test)]
mod tests;

pub use builder::Resolver;
pub use env::{EnvSnapshot, env_var_or_none};
pub use error::ConfigError;
pub use merged::MergedConfig;
pub use overrides::OverrideBindings;
pub use source::ConfigSource;
