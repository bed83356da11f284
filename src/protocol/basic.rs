//! Positions, ranges, edits and the other building blocks every message uses.

use std::{collections::BTreeMap, fmt};

use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    value::Value,
};

/// Identifies a request so its response can be correlated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestId {
    Number(i64),
    String(String),
}

impl From<i32> for RequestId {
    fn from(value: i32) -> Self {
        RequestId::Number(i64::from(value))
    }
}

impl From<i64> for RequestId {
    fn from(value: i64) -> Self {
        RequestId::Number(value)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        RequestId::String(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        RequestId::String(value.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::String(s) => write!(f, "{s}"),
        }
    }
}

impl Encodable for RequestId {
    fn encode(&self) -> Value {
        match self {
            RequestId::Number(n) => n.encode(),
            RequestId::String(s) => s.encode(),
        }
    }
}

impl Decodable for RequestId {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(_) => i64::decode(value).map(RequestId::Number),
            Value::String(s) => Ok(RequestId::String(s.clone())),
            _ => Err(DecodeError::unmatched_branch("RequestId")),
        }
    }
}

/// Zero-based line and UTF-16 character offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl Encodable for Position {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("line", &self.line)
            .field("character", &self.character)
            .build()
    }
}

impl Decodable for Position {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            line: fields.required("line")?,
            character: fields.required("character")?,
        })
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl Encodable for Range {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("start", &self.start)
            .field("end", &self.end)
            .build()
    }
}

impl Decodable for Range {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            start: fields.required("start")?,
            end: fields.required("end")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub uri: String,
    pub range: Range,
}

impl Encodable for Location {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("uri", &self.uri)
            .field("range", &self.range)
            .build()
    }
}

impl Decodable for Location {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            uri: fields.required("uri")?,
            range: fields.required("range")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl Encodable for TextEdit {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("range", &self.range)
            .field("newText", &self.new_text)
            .build()
    }
}

impl Decodable for TextEdit {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            range: fields.required("range")?,
            new_text: fields.required("newText")?,
        })
    }
}

/// A command the client can execute, e.g. from a code lens or code action.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub title: String,
    pub command: String,
    pub arguments: Option<Vec<Value>>,
}

impl Encodable for Command {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("title", &self.title)
            .field("command", &self.command)
            .optional("arguments", &self.arguments)
            .build()
    }
}

impl Decodable for Command {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            title: fields.required("title")?,
            command: fields.required("command")?,
            arguments: fields.optional("arguments")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedTextDocumentIdentifier {
    pub uri: String,
    pub version: i32,
}

impl Encodable for VersionedTextDocumentIdentifier {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("uri", &self.uri)
            .field("version", &self.version)
            .build()
    }
}

impl Decodable for VersionedTextDocumentIdentifier {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            uri: fields.required("uri")?,
            version: fields.required("version")?,
        })
    }
}

/// Edits to one specific version of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentEdit {
    pub text_document: VersionedTextDocumentIdentifier,
    pub edits: Vec<TextEdit>,
}

impl Encodable for TextDocumentEdit {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("textDocument", &self.text_document)
            .field("edits", &self.edits)
            .build()
    }
}

impl Decodable for TextDocumentEdit {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            text_document: fields.required("textDocument")?,
            edits: fields.required("edits")?,
        })
    }
}

/// Changes to many documents at once.
///
/// On the wire `Changes` is a bare object keyed by document URI and
/// `DocumentChanges` is a bare array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEdit {
    Changes(BTreeMap<String, Vec<TextEdit>>),
    DocumentChanges(Vec<TextDocumentEdit>),
}

impl Encodable for WorkspaceEdit {
    fn encode(&self) -> Value {
        match self {
            WorkspaceEdit::Changes(changes) => changes.encode(),
            WorkspaceEdit::DocumentChanges(changes) => changes.encode(),
        }
    }
}

impl Decodable for WorkspaceEdit {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(_) => Decodable::decode(value).map(WorkspaceEdit::Changes),
            Value::Array(_) => Decodable::decode(value).map(WorkspaceEdit::DocumentChanges),
            _ => Err(DecodeError::unmatched_branch("WorkspaceEdit")),
        }
    }
}
