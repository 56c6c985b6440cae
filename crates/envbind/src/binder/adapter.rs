//! The binder entry point.
//!
//! Responsibilities:
//! - Own an environment source and bind declared targets from it
//! - Run the optional bootstrap merge before binding
//!
//! Invariants:
//! - The descriptor table is verified before any field is assigned
//! - Binding a field either succeeds or stops the walk; fields already
//!   bound keep their values (no rollback)
//! - `load` only reads its source; bootstrap is the sole mutation

use std::path::Path;

use crate::binder::{bootstrap, convert, error::BindError};
use crate::constants::LOCAL_ENV_FILE;
use crate::env::{EnvSource, ProcessEnv};
use crate::schema::{self, Bindable, Field, Slot};

/// Binds declared targets from an environment source.
///
/// The source is injected, so the same binding logic runs against the real
/// process environment ([`Binder::from_process_env`]) or an in-memory map
/// ([`crate::MapEnv`]) without behavioral differences.
#[derive(Debug, Default)]
pub struct Binder<E = ProcessEnv> {
    env: E,
}

impl Binder<ProcessEnv> {
    /// A binder over the real process environment.
    pub fn from_process_env() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> Binder<E> {
    /// A binder over `env`.
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The underlying environment source.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Merges [`LOCAL_ENV_FILE`] from the current working directory into the
    /// source, keeping entries already set.
    ///
    /// Best-effort: a missing file is fine, and a malformed or unreadable
    /// one merges nothing. Failure modes are logged, never returned.
    pub fn load_dotenv(&mut self) {
        self.load_dotenv_from(LOCAL_ENV_FILE);
    }

    /// [`Binder::load_dotenv`] for an explicit path.
    pub fn load_dotenv_from(&mut self, path: impl AsRef<Path>) {
        bootstrap::merge_dotenv(&mut self.env, path.as_ref());
    }

    /// Populates `target` from the environment source.
    ///
    /// Fields bind in declaration order. A variable that is unset or fails
    /// to parse resolves to the field's fallback; only schema-shape problems
    /// error. When an error is returned mid-walk, fields bound before it
    /// keep their new values.
    ///
    /// # Errors
    ///
    /// - [`BindError::InvalidTarget`] when the descriptor table carries an
    ///   unnamed or duplicated field
    /// - [`BindError::MissingAnnotation`] when a field names no variable
    /// - [`BindError::UnsupportedType`] when a field's type has no binding
    pub fn load<T: Bindable>(&self, target: &mut T) -> Result<(), BindError> {
        let fields = target.fields();
        schema::verify_table(std::any::type_name::<T>(), &fields)?;

        for Field { name, var, slot } in fields {
            if var.is_empty() {
                return Err(BindError::MissingAnnotation { field: name });
            }
            match slot {
                Slot::Str { place, fallback } => {
                    *place = convert::resolve_str(&self.env, var, fallback);
                }
                Slot::Int { place, fallback } => {
                    *place = convert::resolve_int(&self.env, var, fallback);
                }
                Slot::Bool { place, fallback } => {
                    *place = convert::resolve_bool(&self.env, var, fallback);
                }
                Slot::Unsupported { type_name } => {
                    return Err(BindError::UnsupportedType {
                        field: name,
                        type_name,
                    });
                }
            }
        }
        Ok(())
    }
}
