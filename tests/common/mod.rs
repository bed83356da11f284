#![allow(dead_code)]

pub mod fixtures;
pub mod strategies;

use lsp_wire::{Decodable, Encodable, Value};

/// Parses a JSON literal used as an expected wire form.
pub fn wire(text: &str) -> Value {
    Value::parse(text).expect("test literal must be valid JSON")
}

/// Encodes `entity` and decodes it back, asserting both directions agree.
pub fn assert_round_trip<T>(entity: &T)
where
    T: Encodable + Decodable + PartialEq + std::fmt::Debug,
{
    let encoded = entity.encode();
    let decoded = T::decode(&encoded).unwrap_or_else(|e| panic!("{e} while decoding {encoded}"));
    assert_eq!(&decoded, entity);
}

/// Converts a wire value into the JSON model the schema validator consumes.
pub fn to_json(value: &Value) -> serde_json::Value {
    serde_json::Value::from(value.clone())
}
