//! Resolving raw variables into typed values.
//!
//! Resolution never errors: an unset variable yields the fallback, and so
//! does a set-but-unparseable one. Strings bind verbatim with no trimming.
//! Booleans accept exactly the tokens `1`, `t`, `T`, `true`, `TRUE`, `True`
//! and `0`, `f`, `F`, `false`, `FALSE`, `False`; anything else, including
//! mixed case like `tRuE`, yields the fallback.

use crate::env::EnvSource;

pub(crate) fn resolve_str(env: &impl EnvSource, var: &str, fallback: &str) -> String {
    env.get(var).unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn resolve_int(env: &impl EnvSource, var: &str, fallback: i64) -> i64 {
    env.get(var)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}

pub(crate) fn resolve_bool(env: &impl EnvSource, var: &str, fallback: bool) -> bool {
    env.get(var)
        .as_deref()
        .and_then(parse_bool_token)
        .unwrap_or(fallback)
}

fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
