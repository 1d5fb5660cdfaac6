//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test default resolution, override precedence, and type-directed parsing.
//! - Test duplicate-namespace detection and lenient-mode fallback.
//! - Test dotenv gating and typed namespace views.
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` to prevent
//!   environment variable pollution.
//! - Those tests also hold `global_test_lock()` for additional
//!   synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
