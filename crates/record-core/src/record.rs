//! The record capability trait and its declaration macro.

use crate::schema::FieldSpec;
use crate::values::ScalarValue;

/// A record shape the engine can introspect.
///
/// Implementations are normally produced by [`record!`](crate::record!); the
/// engine only needs the declaration-ordered field table plus positional
/// access to the field values. `Default` supplies the zero values that fields
/// keep when no column matches them.
pub trait Record: Default + Clone {
    /// Field table in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Value of the field at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range for [`fields`](Record::fields).
    fn get(&self, index: usize) -> ScalarValue;

    /// Store `value` into the field at `index`. A value whose kind does not
    /// match the field is ignored.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range for [`fields`](Record::fields).
    fn set(&mut self, index: usize, value: &ScalarValue);
}

/// Declare a record struct together with its [`Record`] implementation.
///
/// Each field may bind a column key with `=> "key"`. Fields without a key are
/// kept out of the mapping: they stay at their default value on load and are
/// omitted from the row on dump. Field types must be one of the five
/// supported scalars (`String`, `i64`, `f32`, `f64`, `bool`).
///
/// The struct derives `Debug`, `Clone`, `Default` and `PartialEq`; extra
/// attributes written above the struct are carried over.
///
/// # Example
///
/// ```rust
/// record_core::record! {
///     pub struct Employee {
///         pub name: String => "name",
///         pub salary: i64 => "salary",
///         pub notes: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $fvis:vis $field:ident : $ty:ty $(=> $column:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $( $fvis $field: $ty, )+
        }

        impl $crate::Record for $name {
            fn fields() -> &'static [$crate::FieldSpec] {
                const FIELDS: &[$crate::FieldSpec] = &[
                    $(
                        $crate::FieldSpec {
                            name: stringify!($field),
                            column: $crate::record!(@column $($column)?),
                            kind: <$ty as $crate::Scalar>::KIND,
                        },
                    )+
                ];
                FIELDS
            }

            fn get(&self, index: usize) -> $crate::ScalarValue {
                let mut position = 0usize;
                $(
                    if position == index {
                        return $crate::Scalar::into_value(self.$field.clone());
                    }
                    position += 1;
                )+
                let _ = position;
                panic!("field index {index} out of range for {}", stringify!($name));
            }

            fn set(&mut self, index: usize, value: &$crate::ScalarValue) {
                let mut position = 0usize;
                $(
                    if position == index {
                        if let Some(extracted) = $crate::Scalar::from_value(value) {
                            self.$field = extracted;
                        }
                        return;
                    }
                    position += 1;
                )+
                let _ = position;
                panic!("field index {index} out of range for {}", stringify!($name));
            }
        }
    };

    (@column) => {
        None
    };
    (@column $column:literal) => {
        Some($column)
    };
}
