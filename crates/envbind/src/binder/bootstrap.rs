//! Best-effort merge of a local env override file.
//!
//! Responsibilities:
//! - Parse a dotenv-format file and merge its entries into an environment
//!   source without replacing existing values
//! - Degrade gracefully: a missing, unreadable, or malformed file merges
//!   nothing and only logs
//!
//! Does NOT handle:
//! - Deciding which file to load (see `binder::adapter`)
//!
//! Invariants:
//! - A file with any malformed line or unstorable entry is applied not at all
//! - A leading UTF-8 byte order mark is ignored
//! - Log lines never include file contents; a rejected line or entry is
//!   identified by its position only

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::env::EnvSource;

/// Merges the dotenv file at `path` into `env`, keeping existing entries.
///
/// The merge is all-or-nothing: the file is parsed and checked fully before
/// anything is written, so a failure midway leaves `env` untouched. Entries
/// that cannot be stored in a process environment (an empty key, `=` or NUL
/// in the key, NUL in the value) reject the file the same way a malformed
/// line does. All failure modes are logged rather than returned.
pub(crate) fn merge_dotenv(env: &mut impl EnvSource, path: &Path) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No local env file found");
            return;
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                kind = %err.kind(),
                "Could not read local env file; nothing merged"
            );
            return;
        }
    };
    // Some editors save dotenv files with a UTF-8 BOM.
    let contents = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let mut parsed = Vec::new();
    for entry in dotenvy::from_read_iter(contents.as_bytes()) {
        match entry {
            Ok((key, value)) => {
                if !is_storable(&key, &value) {
                    warn!(
                        path = %path.display(),
                        entry_index = parsed.len(),
                        "Entry in local env file cannot be stored; nothing merged"
                    );
                    return;
                }
                parsed.push((key, value));
            }
            Err(dotenvy::Error::LineParse(_, error_index)) => {
                warn!(
                    path = %path.display(),
                    error_index,
                    "Malformed line in local env file; nothing merged"
                );
                return;
            }
            Err(_) => {
                warn!(path = %path.display(), "Could not load local env file; nothing merged");
                return;
            }
        }
    }

    let mut merged = 0usize;
    let mut kept = 0usize;
    for (key, value) in &parsed {
        if env.set_if_unset(key, value) {
            merged += 1;
        } else {
            kept += 1;
        }
    }
    debug!(path = %path.display(), merged, kept, "Merged local env file");
}

/// Whether a parsed pair can be stored in a process environment table.
/// [`std::env::set_var`] panics on an empty key, `=` or NUL in the key, or
/// NUL in the value.
fn is_storable(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}
