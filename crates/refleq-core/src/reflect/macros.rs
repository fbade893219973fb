//! Composite descriptor macro.

/// Implement [`Reflect`](crate::reflect::Reflect) for a struct by listing
/// its comparable fields.
///
/// The field list is the compile-time member-descriptor table: only named
/// data fields belong in it. An optional `key = [...]` clause designates the
/// identifying subset used to pre-filter candidates during lenient container
/// matching (think key columns of a row type).
///
/// ```
/// use refleq_core::reflect_composite;
///
/// struct Address {
///     city: String,
///     zip: u32,
/// }
/// reflect_composite!(Address { city, zip });
///
/// struct Row {
///     pk: u64,
///     label: String,
/// }
/// reflect_composite!(Row { pk, label }, key = [pk]);
/// ```
#[macro_export]
macro_rules! reflect_composite {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        $crate::reflect_composite!(@impl $ty, [], [$($field),+]);
    };
    ($ty:ty { $($field:ident),+ $(,)? }, key = [$($key:ident),+ $(,)?]) => {
        $crate::reflect_composite!(@impl $ty, [$($key),+], [$($field),+]);
    };
    (@impl $ty:ty, [$($key:ident),*], [$($field:ident),+]) => {
        impl $crate::reflect::Reflect for $ty {
            fn shape(&self) -> $crate::reflect::Shape<'_> {
                $crate::reflect::Shape::Composite($crate::reflect::CompositeShape {
                    type_name: ::core::stringify!($ty),
                    key_fields: &[$(::core::stringify!($key)),*],
                    fields: ::std::vec![
                        $(
                            $crate::reflect::FieldSlot {
                                name: ::core::stringify!($field),
                                value: &self.$field,
                            }
                        ),+
                    ],
                })
            }
        }
    };
}
