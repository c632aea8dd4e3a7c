/// Implements [`Bindable`](crate::bind::Bindable) for a record.
///
/// Each bound field is listed with its type, and optionally the param name it
/// is read from. Fields in the `ignore` group are never bound.
///
/// ```
/// use switchyard::bindable;
///
/// #[derive(Debug, Default)]
/// struct NewShare {
///     author: i64,
///     title: String,
///     token: Vec<u8>,
/// }
///
/// bindable! {
///     NewShare {
///         author: i64 => "author_id",
///         title: String,
///     }
///     ignore { token }
/// }
/// ```
#[macro_export]
macro_rules! bindable {
    (@param $field:ident) => {
        stringify!($field)
    };
    (@param $field:ident $param:literal) => {
        $param
    };

    (
        $record:ty {
            $($field:ident : $ty:ty $(=> $param:literal)?),* $(,)?
        }
        $(ignore { $($ignored:ident),* $(,)? })?
    ) => {
        impl $crate::bind::Bindable for $record {
            fn field_specs() -> &'static [$crate::bind::FieldSpec] {
                const SPECS: &[$crate::bind::FieldSpec] = &[
                    $(
                        $crate::bind::FieldSpec::new(
                            stringify!($field),
                            <$ty as $crate::coerce::FromValue>::KIND,
                        )
                        .rename($crate::bindable!(@param $field $($param)?)),
                    )*
                    $($(
                        $crate::bind::FieldSpec::new(
                            stringify!($ignored),
                            $crate::coerce::ValueKind::Str,
                        )
                        .ignore(),
                    )*)?
                ];
                SPECS
            }

            fn assign(&mut self, field: &str, value: $crate::coerce::Value) -> bool {
                $(
                    if field == stringify!($field) {
                        return match <$ty as $crate::coerce::FromValue>::from_value(value) {
                            Some(v) => {
                                self.$field = v;
                                true
                            }
                            None => false,
                        };
                    }
                )*
                let _ = value;
                false
            }
        }
    };
}
