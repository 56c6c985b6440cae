//! Constants used throughout the crate.
//!
//! Centralizes bootstrap file naming and the zero-like fallbacks applied
//! when a descriptor does not declare its own.

// ============================================================================
// Bootstrap
// ============================================================================

/// Name of the local override file merged by [`crate::Binder::load_dotenv`].
///
/// Resolved relative to the current working directory. The file is optional;
/// a missing file is logged at info level and nothing is merged.
pub const LOCAL_ENV_FILE: &str = ".env.local";

// ============================================================================
// Zero-like Fallbacks
// ============================================================================

/// Fallback for string fields whose variable is unset.
pub const DEFAULT_STR: &str = "";

/// Fallback for integer fields whose variable is unset or unparseable.
pub const DEFAULT_INT: i64 = 0;

/// Fallback for boolean fields whose variable is unset or not a recognized
/// token.
pub const DEFAULT_BOOL: bool = false;
