//! Environment snapshot and variable filtering.
//!
//! Responsibilities:
//! - Snapshot the process environment once so resolution stays pure.
//! - Filter empty/whitespace-only variables and trim surrounding whitespace.
//! - Provide `env_var_or_none` for direct single-variable reads.
//!
//! Does NOT handle:
//! - `.env` file loading (see `Resolver::load_dotenv` in builder.rs).
//! - Override parsing (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - A snapshot never changes after construction; re-resolution takes a
//!   fresh snapshot.

use std::collections::BTreeMap;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// An immutable snapshot of the process environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Build a snapshot from explicit pairs (primarily for testing).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// A snapshot with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a variable, filtering blank values per the module invariants.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.vars
            .get(var)
            .map(|raw| raw.trim())
            .filter(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
