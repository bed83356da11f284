use std::{fmt, ops::RangeInclusive};

use crate::{
    codec::{decode_integer, Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    value::Value,
};

/// Code in the range JSON-RPC reserves for implementation-defined server
/// errors, excluding the codes that have their own [`ErrorCode`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerErrorCode(i32);

impl ServerErrorCode {
    pub const RANGE: RangeInclusive<i32> = -32099..=-32000;

    pub fn new(code: i32) -> Option<Self> {
        let named = ErrorCode::named(i64::from(code)).is_some();
        (Self::RANGE.contains(&code) && !named).then_some(Self(code))
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Error codes a response may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    ServerNotInitialized,
    UnknownErrorCode,
    RequestCancelled,
    ContentModified,
    ServerCancelled,
    RequestFailed,
    ServerDefined(ServerErrorCode),
}

impl ErrorCode {
    pub const fn code(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::ServerNotInitialized => -32002,
            ErrorCode::UnknownErrorCode => -32001,
            ErrorCode::RequestCancelled => -32800,
            ErrorCode::ContentModified => -32801,
            ErrorCode::ServerCancelled => -32802,
            ErrorCode::RequestFailed => -32803,
            ErrorCode::ServerDefined(code) => code.get(),
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::named(code).or_else(|| {
            i32::try_from(code)
                .ok()
                .and_then(ServerErrorCode::new)
                .map(ErrorCode::ServerDefined)
        })
    }

    fn named(code: i64) -> Option<Self> {
        Some(match code {
            -32700 => ErrorCode::ParseError,
            -32600 => ErrorCode::InvalidRequest,
            -32601 => ErrorCode::MethodNotFound,
            -32602 => ErrorCode::InvalidParams,
            -32603 => ErrorCode::InternalError,
            -32002 => ErrorCode::ServerNotInitialized,
            -32001 => ErrorCode::UnknownErrorCode,
            -32800 => ErrorCode::RequestCancelled,
            -32801 => ErrorCode::ContentModified,
            -32802 => ErrorCode::ServerCancelled,
            -32803 => ErrorCode::RequestFailed,
            _ => return None,
        })
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Encodable for ErrorCode {
    fn encode(&self) -> Value {
        Value::from(self.code())
    }
}

impl Decodable for ErrorCode {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let code = decode_integer(value)?;
        Self::from_code(code).ok_or_else(|| DecodeError::unknown_code(code))
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseError {
    pub code: ErrorCode,
    pub message: String,
    pub data: Option<Value>,
}

impl ResponseError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl Encodable for ResponseError {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("code", &self.code)
            .field("message", &self.message)
            .optional("data", &self.data)
            .build()
    }
}

impl Decodable for ResponseError {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            code: fields.required("code")?,
            message: fields.required("message")?,
            data: fields.optional("data")?,
        })
    }
}
