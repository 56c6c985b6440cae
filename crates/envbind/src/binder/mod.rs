//! Binding environment variables into declared targets.
//!
//! Responsibilities:
//! - Walk a target's descriptor table and assign each field from the
//!   environment source (`adapter`).
//! - Merge a local override file into the source, best effort (`bootstrap`).
//! - Resolve raw values into typed ones with fallbacks (`convert`).
//!
//! Does NOT handle:
//! - Descriptor table construction and verification (see `schema`).
//! - Environment source implementations (see `env`).
//!
//! Invariants / Assumptions:
//! - Only schema-shape problems surface as errors; value problems resolve
//!   to fallbacks.
//! - Binding reads the source; the bootstrap merge is the sole writer.

mod adapter;
mod bootstrap;
mod convert;
mod error;

#[cfg(test)]
mod tests;

pub use adapter::Binder;
pub use error::BindError;
