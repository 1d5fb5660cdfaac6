//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for all resolution failures.
//!
//! Does NOT handle:
//! - Recovery decisions; callers choose whether to abort startup or fall
//!   back to defaults.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names,
//!   dotted keys, raw values).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;

use thiserror::Error;

use crate::types::ValueKind;

/// Errors that can occur during configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Two sources declared the same namespace.
    #[error("duplicate configuration namespace: {namespace}")]
    DuplicateNamespace { namespace: String },

    /// An override variable is set but does not parse to the declared type.
    #[error("invalid value for {var} (overrides {key}): {value:?} is not a valid {expected}")]
    InvalidOverrideValue {
        var: String,
        key: String,
        value: String,
        expected: ValueKind,
    },

    /// A typed view was requested but the resolved config lacks a key.
    #[error("missing configuration key: {namespace}.{key}")]
    MissingKey { namespace: String, key: String },

    /// A typed view was requested but a key holds a value of the wrong type.
    #[error("configuration key {namespace}.{key} is not a {expected}")]
    TypeMismatch {
        namespace: String,
        key: String,
        expected: ValueKind,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
