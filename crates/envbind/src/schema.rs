//! Field descriptor tables.
//!
//! Responsibilities:
//! - Define the descriptor types ([`Field`], [`Slot`]) a bind target exposes
//! - Define the [`Bindable`] and [`BindValue`] traits that produce them
//! - Verify descriptor tables before any binding happens
//!
//! Does NOT handle:
//! - Resolving variables into values (see `binder::convert`)
//! - Walking the table and assigning fields (see `binder::adapter`)
//!
//! Invariants:
//! - Descriptor names are non-empty and unique within a table
//! - A slot borrows its field mutably, so a table cannot outlive its target
//!   or alias a field twice

use crate::binder::BindError;
use crate::constants::{DEFAULT_BOOL, DEFAULT_INT, DEFAULT_STR};

/// Where a resolved value lands, with the fallback used when the variable
/// is unset or unparseable.
#[derive(Debug)]
pub enum Slot<'a> {
    /// A string field. Unset resolves to `fallback`; set binds verbatim.
    Str {
        place: &'a mut String,
        fallback: &'static str,
    },
    /// A signed integer field. Unset or unparseable resolves to `fallback`.
    Int { place: &'a mut i64, fallback: i64 },
    /// A boolean field. Unset or unrecognized resolves to `fallback`.
    Bool { place: &'a mut bool, fallback: bool },
    /// A field whose type the binder cannot populate. Surfaces as
    /// [`BindError::UnsupportedType`] when the table is walked.
    Unsupported { type_name: &'static str },
}

/// One field of a bind target: its name, the environment variable it reads,
/// and the slot the value lands in.
///
/// An empty `var` means the field has no annotation and fails the bind with
/// [`BindError::MissingAnnotation`].
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub var: &'static str,
    pub slot: Slot<'a>,
}

/// A struct whose fields can be populated from an environment source.
///
/// Implementations return one [`Field`] per bound field, in declaration
/// order. The [`crate::bindable!`] macro derives this; hand-written tables
/// are equally valid and can declare per-field fallbacks the macro does not
/// express.
pub trait Bindable {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A field type the binder knows how to populate.
///
/// Implemented for `String`, `i64`, and `bool`; each maps a mutable borrow
/// of the field to its [`Slot`] with the zero-like fallback.
pub trait BindValue {
    fn slot(place: &mut Self) -> Slot<'_>;
}

impl BindValue for String {
    fn slot(place: &mut Self) -> Slot<'_> {
        Slot::Str {
            place,
            fallback: DEFAULT_STR,
        }
    }
}

impl BindValue for i64 {
    fn slot(place: &mut Self) -> Slot<'_> {
        Slot::Int {
            place,
            fallback: DEFAULT_INT,
        }
    }
}

impl BindValue for bool {
    fn slot(place: &mut Self) -> Slot<'_> {
        Slot::Bool {
            place,
            fallback: DEFAULT_BOOL,
        }
    }
}

/// Checks a descriptor table is well formed before any field is assigned.
///
/// Every descriptor must carry a non-empty field name, and no two
/// descriptors may share one. Violations surface as
/// [`BindError::InvalidTarget`] naming the target type.
pub(crate) fn verify_table(
    type_name: &'static str,
    fields: &[Field<'_>],
) -> Result<(), BindError> {
    for (index, field) in fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(BindError::InvalidTarget {
                type_name,
                detail: format!("descriptor {index} has an empty field name"),
            });
        }
        if fields[..index].iter().any(|seen| seen.name == field.name) {
            return Err(BindError::InvalidTarget {
                type_name,
                detail: format!("duplicate descriptor for field {}", field.name),
            });
        }
    }
    Ok(())
}
