/// Declares a field-value enum with lossless integer conversions
///
/// The `#[repr()]` must come first. Values outside the listed variants
/// convert to an added `Unknown` variant that keeps the raw value, so
/// decoding a header field never fails. Variant values may be any constant
/// expression, including calls to `const fn`.
///
/// ```
/// # use imgdim_common::utils::convertible_enum;
/// convertible_enum!(
///     #[repr(u16)]
///     #[derive(Debug, Clone, Copy, PartialEq)]
///     pub enum Unit {
///         Inch = 2,
///         Centimeter = 3,
///     }
/// );
/// assert_eq!(Unit::from(3), Unit::Centimeter);
/// assert_eq!(Unit::from(7), Unit::Unknown(7));
/// assert_eq!(u16::from(Unit::Inch), 2);
/// assert_eq!(u16::from(Unit::Unknown(7)), 7);
/// ```
#[macro_export]
macro_rules! convertible_enum {
    (#[repr($repr:ty)]$(#[$attr:meta])* $vis:vis enum $name:ident {
        $($(#[$variant_attr:meta])* $variant:ident = $value:expr,)*
    }) => {
        #[repr($repr)]
        $(#[$attr])*
        $vis enum $name {
            $($(#[$variant_attr])* $variant = $value,)*
            Unknown($repr)
        }

        impl std::convert::From<$repr> for $name {
            fn from(raw: $repr) -> Self {
                // Plain comparisons since `const fn` calls are not allowed as
                // match patterns
                $(if raw == $value {
                    return Self::$variant;
                })*
                Self::Unknown(raw)
            }
        }

        impl std::convert::From<$name> for $repr {
            fn from(value: $name) -> $repr {
                match value {
                    $($name::$variant => $value,)*
                    $name::Unknown(raw) => raw,
                }
            }
        }
    }
}

pub use convertible_enum;
