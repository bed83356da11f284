//! Parameters clients send about open documents.

use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    protocol::basic::Position,
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentIdentifier {
    pub uri: String,
}

impl Encodable for TextDocumentIdentifier {
    fn encode(&self) -> Value {
        ObjectBuilder::new().field("uri", &self.uri).build()
    }
}

impl Decodable for TextDocumentIdentifier {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            uri: fields.required("uri")?,
        })
    }
}

/// Full contents of a document as transferred on `textDocument/didOpen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentItem {
    pub uri: String,
    pub language_id: String,
    pub version: i32,
    pub text: String,
}

impl Encodable for TextDocumentItem {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("uri", &self.uri)
            .field("languageId", &self.language_id)
            .field("version", &self.version)
            .field("text", &self.text)
            .build()
    }
}

impl Decodable for TextDocumentItem {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            uri: fields.required("uri")?,
            language_id: fields.required("languageId")?,
            version: fields.required("version")?,
            text: fields.required("text")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DidOpenTextDocumentParams {
    pub text_document: TextDocumentItem,
}

impl Encodable for DidOpenTextDocumentParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("textDocument", &self.text_document)
            .build()
    }
}

impl Decodable for DidOpenTextDocumentParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            text_document: fields.required("textDocument")?,
        })
    }
}

/// Params of hover, definition, completion and other point queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentPositionParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

impl Encodable for TextDocumentPositionParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("textDocument", &self.text_document)
            .field("position", &self.position)
            .build()
    }
}

impl Decodable for TextDocumentPositionParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            text_document: fields.required("textDocument")?,
            position: fields.required("position")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceContext {
    pub include_declaration: bool,
}

impl Encodable for ReferenceContext {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("includeDeclaration", &self.include_declaration)
            .build()
    }
}

impl Decodable for ReferenceContext {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            include_declaration: fields.required("includeDeclaration")?,
        })
    }
}

/// `textDocument/references` params; flattened position params plus context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
    pub context: ReferenceContext,
}

impl Encodable for ReferenceParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("textDocument", &self.text_document)
            .field("position", &self.position)
            .field("context", &self.context)
            .build()
    }
}

impl Decodable for ReferenceParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            text_document: fields.required("textDocument")?,
            position: fields.required("position")?,
            context: fields.required("context")?,
        })
    }
}
