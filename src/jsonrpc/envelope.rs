//! The outer JSON-RPC 2.0 objects wrapping every payload.

use crate::{
    codec::{DecodeError, Encodable, FieldReader},
    config::JSONRPC_VERSION,
    jsonrpc::error::ResponseError,
    protocol::RequestId,
    value::Value,
};

fn envelope(entries: Vec<(&'static str, Value)>) -> Value {
    std::iter::once(("jsonrpc", Value::from(JSONRPC_VERSION)))
        .chain(entries)
        .collect()
}

/// `{jsonrpc, id, method, params}`; `params` is omitted when `None`.
pub fn request(id: &RequestId, method: &str, params: impl Into<Option<Value>>) -> Value {
    let mut entries = vec![("id", id.encode()), ("method", Value::from(method))];
    if let Some(params) = params.into() {
        entries.push(("params", params));
    }
    envelope(entries)
}

/// `{jsonrpc, method, params}` with no `id` key at all.
pub fn notification(method: &str, params: impl Into<Option<Value>>) -> Value {
    let mut entries = vec![("method", Value::from(method))];
    if let Some(params) = params.into() {
        entries.push(("params", params));
    }
    envelope(entries)
}

/// `{jsonrpc, id, result}`; an empty result is passed as `Value::Null`.
pub fn response(id: &RequestId, result: Value) -> Value {
    envelope(vec![("id", id.encode()), ("result", result)])
}

/// `{jsonrpc, id, error}`. `id` is `null` when the request id is unknown.
pub fn error_response(id: Option<&RequestId>, error: &ResponseError) -> Value {
    let id = id.map_or(Value::Null, Encodable::encode);
    envelope(vec![("id", id), ("error", error.encode())])
}

/// Opens an envelope for decoding after checking its `jsonrpc` tag.
pub(crate) fn open(value: &Value) -> Result<FieldReader<'_>, DecodeError> {
    let fields = FieldReader::new(value)?;
    let version: String = fields.required("jsonrpc")?;
    if version != JSONRPC_VERSION {
        return Err(DecodeError::TypeMismatch {
            path: Default::default(),
            expected: "\"2.0\"",
            actual: "string",
        }
        .within("jsonrpc"));
    }
    Ok(fields)
}
