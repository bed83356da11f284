//! The uniform encode/decode contract shared by every protocol entity.
//!
//! Encoding a well-typed entity cannot fail. Decoding treats its input as
//! untrusted and reports the first problem it finds together with the path
//! of the offending value.

mod enumeration;
mod error;
mod record;

use std::collections::BTreeMap;

pub use error::{DecodeError, FieldPath, PathSegment};
pub use record::{FieldReader, ObjectBuilder};

pub(crate) use enumeration::closed_enum;

use crate::value::Value;

pub trait Encodable {
    fn encode(&self) -> Value;
}

pub trait Decodable: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;

    /// Decodes the value of an optional field; `null` counts as absent.
    fn decode_optional(value: &Value) -> Result<Option<Self>, DecodeError> {
        match value {
            Value::Null => Ok(None),
            other => Self::decode(other).map(Some),
        }
    }
}

/// Reads an integral number, rejecting fractions and values past 2^53.
pub fn decode_integer(value: &Value) -> Result<i64, DecodeError> {
    value
        .as_i64()
        .ok_or_else(|| DecodeError::type_mismatch("integer", value))
}

impl Encodable for Value {
    fn encode(&self) -> Value {
        self.clone()
    }
}

impl Decodable for Value {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }

    // An untyped payload keeps an explicit null.
    fn decode_optional(value: &Value) -> Result<Option<Self>, DecodeError> {
        Ok(Some(value.clone()))
    }
}

impl Encodable for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Decodable for String {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::type_mismatch("string", value))
    }
}

impl Encodable for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Decodable for bool {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::type_mismatch("boolean", value))
    }
}

impl Encodable for i32 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Decodable for i32 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let n = decode_integer(value)?;
        i32::try_from(n).map_err(|_| DecodeError::type_mismatch("32-bit integer", value))
    }
}

impl Encodable for i64 {
    fn encode(&self) -> Value {
        Value::Number(*self as f64)
    }
}

impl Decodable for i64 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        decode_integer(value)
    }
}

impl Encodable for u32 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl Decodable for u32 {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let n = decode_integer(value)?;
        u32::try_from(n).map_err(|_| DecodeError::type_mismatch("unsigned 32-bit integer", value))
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self) -> Value {
        self.iter().map(Encodable::encode).collect()
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| DecodeError::type_mismatch("array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::decode(item).map_err(|e| e.within(index)))
            .collect()
    }
}

impl<T: Encodable> Encodable for BTreeMap<String, T> {
    fn encode(&self) -> Value {
        self.iter().map(|(k, v)| (k.as_str(), v.encode())).collect()
    }
}

impl<T: Decodable> Decodable for BTreeMap<String, T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let map = value
            .as_object()
            .ok_or_else(|| DecodeError::type_mismatch("object", value))?;
        map.iter()
            .map(|(key, item)| {
                T::decode(item)
                    .map(|decoded| (key.clone(), decoded))
                    .map_err(|e| e.within(key.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_reject_fractions() {
        let err = u32::decode(&Value::Number(1.5)).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { expected: "integer", actual: "number", .. }
        ));
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert!(u32::decode(&Value::Number(-1.0)).is_err());
        assert_eq!(i32::decode(&Value::Number(-1.0)), Ok(-1));
    }

    #[test]
    fn wide_integers_decode_up_to_safe_range() {
        assert_eq!(i64::decode(&Value::Number(3_000_000_000.0)), Ok(3_000_000_000));
        assert_eq!(
            i64::decode(&Value::Number(-9_007_199_254_740_991.0)),
            Ok(-9_007_199_254_740_991)
        );
        assert!(i64::decode(&Value::Number(9_007_199_254_740_992.0)).is_err());
        assert_eq!(3_000_000_000i64.encode().to_json_string(), "3000000000");
    }

    #[test]
    fn null_optional_is_absent_except_for_untyped_values() {
        assert_eq!(String::decode_optional(&Value::Null), Ok(None));
        assert_eq!(
            String::decode_optional(&Value::from("x")),
            Ok(Some("x".to_string()))
        );
        assert_eq!(Value::decode_optional(&Value::Null), Ok(Some(Value::Null)));
    }

    #[test]
    fn array_errors_carry_index() {
        let value = Value::parse(r#"["a", 2]"#).unwrap();
        let err = Vec::<String>::decode(&value).unwrap_err();
        assert_eq!(err.path().to_string(), "$[1]");
    }
}
