/// Declares a closed enumeration carried on the wire as its integer code.
///
/// Decoding accepts only integral numbers naming a declared variant; any
/// other code is an `UnknownEnumerationCode`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant = $code, )+
        }

        impl $name {
            /// Every declared variant, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn code(self) -> i32 {
                self as i32
            }

            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl $crate::codec::Encodable for $name {
            fn encode(&self) -> $crate::value::Value {
                $crate::value::Value::from(self.code())
            }
        }

        impl $crate::codec::Decodable for $name {
            fn decode(
                value: &$crate::value::Value,
            ) -> Result<Self, $crate::codec::DecodeError> {
                let code = $crate::codec::decode_integer(value)?;
                Self::from_code(code).ok_or_else(|| $crate::codec::DecodeError::unknown_code(code))
            }
        }
    };
}

pub(crate) use closed_enum;
