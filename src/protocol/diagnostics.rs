use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    protocol::{basic::Range, kinds::DiagnosticSeverity},
    value::Value,
};

/// A diagnostic's code: numeric or symbolic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    Number(i64),
    String(String),
}

impl Encodable for DiagnosticCode {
    fn encode(&self) -> Value {
        match self {
            DiagnosticCode::Number(n) => n.encode(),
            DiagnosticCode::String(s) => s.encode(),
        }
    }
}

impl Decodable for DiagnosticCode {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(_) => i64::decode(value).map(DiagnosticCode::Number),
            Value::String(s) => Ok(DiagnosticCode::String(s.clone())),
            _ => Err(DecodeError::unmatched_branch("DiagnosticCode")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub severity: Option<DiagnosticSeverity>,
    pub code: Option<DiagnosticCode>,
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
            severity: None,
            code: None,
            source: None,
        }
    }
}

impl Encodable for Diagnostic {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("range", &self.range)
            .field("message", &self.message)
            .optional("severity", &self.severity)
            .optional("code", &self.code)
            .optional("source", &self.source)
            .build()
    }
}

impl Decodable for Diagnostic {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            range: fields.required("range")?,
            message: fields.required("message")?,
            severity: fields.optional("severity")?,
            code: fields.optional("code")?,
            source: fields.optional("source")?,
        })
    }
}

/// `textDocument/publishDiagnostics` params. An empty list clears the
/// document's diagnostics, so it is always emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishDiagnosticsParams {
    pub uri: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Encodable for PublishDiagnosticsParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("uri", &self.uri)
            .field("diagnostics", &self.diagnostics)
            .build()
    }
}

impl Decodable for PublishDiagnosticsParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            uri: fields.required("uri")?,
            diagnostics: fields.required("diagnostics")?,
        })
    }
}
