//! Tests for the binder and its bootstrap.
//!
//! Responsibilities:
//! - Test typed resolution and fallbacks over in-memory sources.
//! - Test the error taxonomy and the no-rollback walk.
//! - Test the best-effort dotenv merge and its log notices.
//! - Test the real process environment source.
//!
//! Does NOT handle:
//! - Raw token conversion rules (tested in convert.rs).
//! - Descriptor table construction (tested in schema.rs and macros.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests touching process-global state hold `env_lock()` as well.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
