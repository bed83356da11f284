use super::{Decodable, DecodeError, Encodable};
use crate::value::{Map, Value};

/// Accumulates the fields of a record.
///
/// Optional fields that are `None` never reach the output, so absence on the
/// wire is always a missing key, never `null`.
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    map: Map,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<T: Encodable + ?Sized>(mut self, key: &str, value: &T) -> Self {
        self.map.insert(key.to_string(), value.encode());
        self
    }

    pub fn optional<T: Encodable>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn build(self) -> Value {
        Value::Object(self.map)
    }
}

/// Borrowed view over an object being decoded into a record.
///
/// Unknown keys are ignored, and an optional field set to `null` reads as
/// absent unless its type is [`Value`]. Errors from nested decoders are
/// re-rooted under the field name.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    map: &'a Map,
}

impl<'a> FieldReader<'a> {
    pub fn new(value: &'a Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| DecodeError::type_mismatch("object", value))
    }

    pub fn required<T: Decodable>(&self, key: &str) -> Result<T, DecodeError> {
        match self.map.get(key) {
            Some(value) => T::decode(value).map_err(|e| e.within(key)),
            None => Err(DecodeError::missing_field().within(key)),
        }
    }

    pub fn optional<T: Decodable>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        self.map
            .get(key)
            .map(|value| T::decode_optional(value).map_err(|e| e.within(key)))
            .transpose()
            .map(Option::flatten)
    }

    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}
