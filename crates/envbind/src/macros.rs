//! Declarative bind target definitions.
//!
//! [`crate::bindable!`] declares a struct and derives its descriptor table
//! in one place, so the field list and the environment schema cannot drift
//! apart.

/// Declares a struct and implements [`crate::Bindable`] for it.
///
/// Each field is written `name: Type => "VAR"`, where `Type` is one of the
/// supported field types (`String`, `i64`, `bool`) and `"VAR"` names the
/// environment variable the field reads. Unsupported field types fail to
/// compile because they lack a [`crate::BindValue`] implementation. Struct
/// and field attributes and visibility pass through unchanged.
///
/// Fields declared this way use the zero-like fallbacks from
/// [`crate::constants`]. A target needing per-field fallbacks implements
/// [`crate::Bindable`] by hand instead.
///
/// ```
/// use envbind::{Binder, MapEnv, bindable};
///
/// bindable! {
///     #[derive(Debug, Default)]
///     pub struct CacheEnv {
///         pub addr: String => "CACHE_ADDR",
///         pub capacity: i64 => "CACHE_CAPACITY",
///     }
/// }
///
/// let env = MapEnv::new().with_var("CACHE_CAPACITY", "512");
/// let mut cache = CacheEnv::default();
/// Binder::new(env).load(&mut cache)?;
///
/// assert_eq!(cache.addr, "");
/// assert_eq!(cache.capacity, 512);
/// # Ok::<(), envbind::BindError>(())
/// ```
#[macro_export]
macro_rules! bindable {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $var:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )+
        }

        impl $crate::Bindable for $name {
            fn fields(&mut self) -> Vec<$crate::Field<'_>> {
                vec![
                    $(
                        $crate::Field {
                            name: stringify!($field),
                            var: $var,
                            slot: <$ty as $crate::BindValue>::slot(&mut self.$field),
                        },
                    )+
                ]
            }
        }
    };
}
