use std::fmt;

use crate::{
    codec::{Decodable, DecodeError, Encodable},
    jsonrpc::{envelope, error::ResponseError},
    protocol::RequestId,
    value::Value,
};

/// Any JSON-RPC message, classified by envelope shape but with an untyped
/// payload.
///
/// A success response always has an id and a result; a failure always has an
/// error object. Neither can be built without the other half.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Request {
        id: RequestId,
        method: String,
        params: Option<Value>,
    },
    Notification {
        method: String,
        params: Option<Value>,
    },
    Response {
        id: RequestId,
        result: Value,
    },
    ErrorResponse {
        id: Option<RequestId>,
        error: ResponseError,
    },
}

impl Message {
    pub fn method(&self) -> Option<&str> {
        match self {
            Message::Request { method, .. } | Message::Notification { method, .. } => {
                Some(method.as_str())
            }
            Message::Response { .. } | Message::ErrorResponse { .. } => None,
        }
    }

    pub fn id(&self) -> Option<&RequestId> {
        match self {
            Message::Request { id, .. } | Message::Response { id, .. } => Some(id),
            Message::ErrorResponse { id, .. } => id.as_ref(),
            Message::Notification { .. } => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Request { id, method, .. } => write!(f, "request {id} {method}"),
            Message::Notification { method, .. } => write!(f, "notification {method}"),
            Message::Response { id, .. } => write!(f, "response {id}"),
            Message::ErrorResponse { id: Some(id), error } => {
                write!(f, "error response {id} ({})", error.code)
            }
            Message::ErrorResponse { id: None, error } => {
                write!(f, "error response ({})", error.code)
            }
        }
    }
}

impl Encodable for Message {
    fn encode(&self) -> Value {
        match self {
            Message::Request { id, method, params } => envelope::request(id, method, params.clone()),
            Message::Notification { method, params } => {
                envelope::notification(method, params.clone())
            }
            Message::Response { id, result } => envelope::response(id, result.clone()),
            Message::ErrorResponse { id, error } => envelope::error_response(id.as_ref(), error),
        }
    }
}

/// `params`, when present, must be an object or an array.
fn structured_params(params: Option<&Value>) -> Result<Option<Value>, DecodeError> {
    match params {
        None => Ok(None),
        Some(params @ (Value::Object(_) | Value::Array(_))) => Ok(Some(params.clone())),
        Some(other) => {
            Err(DecodeError::type_mismatch("object or array", other).within("params"))
        }
    }
}

impl Decodable for Message {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = envelope::open(value)?;

        if fields.contains("method") {
            let method = fields.required("method")?;
            let params = structured_params(fields.raw("params"))?;
            return Ok(if fields.contains("id") {
                Message::Request {
                    id: fields.required("id")?,
                    method,
                    params,
                }
            } else {
                Message::Notification { method, params }
            });
        }

        let Some(id) = fields.raw("id") else {
            return Err(DecodeError::unmatched_branch("Message"));
        };

        match (fields.raw("result"), fields.contains("error")) {
            (Some(result), false) => Ok(Message::Response {
                id: fields.required("id")?,
                result: result.clone(),
            }),
            (None, true) => Ok(Message::ErrorResponse {
                id: match id {
                    Value::Null => None,
                    _ => Some(fields.required("id")?),
                },
                error: fields.required("error")?,
            }),
            (None, false) => Err(DecodeError::missing_field().within("result")),
            (Some(_), true) => Err(DecodeError::unmatched_branch("Message")),
        }
    }
}
