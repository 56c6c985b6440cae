//! Environment binding for statically declared configuration structures.
//!
//! This crate populates caller-owned configuration structs from environment
//! variables, optionally pre-loaded from a local `.env.local` override file.
//! Each field carries a descriptor naming its source variable; a variable
//! that is unset or fails to parse resolves to the descriptor's fallback
//! instead of an error, so only schema-shape problems surface as
//! [`BindError`] values.
//!
//! ```
//! use envbind::{Binder, MapEnv, bindable};
//!
//! bindable! {
//!     #[derive(Debug, Default)]
//!     struct ServerEnv {
//!         port: i64 => "PORT",
//!         debug: bool => "DEBUG",
//!         name: String => "NAME",
//!     }
//! }
//!
//! let env = MapEnv::new()
//!     .with_var("PORT", "8080")
//!     .with_var("DEBUG", "true");
//!
//! let mut server = ServerEnv::default();
//! Binder::new(env).load(&mut server)?;
//!
//! assert_eq!(server.port, 8080);
//! assert!(server.debug);
//! assert_eq!(server.name, "");
//! # Ok::<(), envbind::BindError>(())
//! ```
//!
//! Binding only reads its environment source, so `load` calls over
//! independent targets are safe to run concurrently. The bootstrap merge
//! ([`Binder::load_dotenv`]) writes to the source; over [`ProcessEnv`] this
//! mutates the process-wide environment table and must be sequenced before
//! any other thread reads or writes it, once per process.

pub mod constants;

mod binder;
mod env;
mod macros;
mod schema;

pub use binder::{BindError, Binder};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use schema::{BindValue, Bindable, Field, Slot};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
