//! Binding errors.
//!
//! Only schema-shape problems are errors. A variable that is unset or fails
//! to parse resolves to its fallback instead, so none of these variants
//! carry environment values.

use thiserror::Error;

/// Errors surfaced while binding a target from an environment source.
#[derive(Error, Debug)]
pub enum BindError {
    /// The target's descriptor table is malformed.
    #[error("invalid bind target {type_name}: {detail}")]
    InvalidTarget {
        type_name: &'static str,
        detail: String,
    },

    /// A field's descriptor names no environment variable.
    #[error("field {field} is missing its environment variable annotation")]
    MissingAnnotation { field: &'static str },

    /// A field's type has no binding, so the binder cannot populate it.
    #[error("field type {type_name} is not supported for field {field}")]
    UnsupportedType {
        field: &'static str,
        type_name: &'static str,
    },
}
