//! Results of the language feature requests.

use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    protocol::{
        basic::{Command, Location, Range, TextEdit},
        kinds::{CompletionItemKind, DocumentHighlightKind, InsertTextFormat, SymbolKind},
    },
    value::Value,
};

/// Hover content: plain markdown text or a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkedString {
    String(String),
    Code { language: String, value: String },
}

impl Encodable for MarkedString {
    fn encode(&self) -> Value {
        match self {
            MarkedString::String(value) => value.encode(),
            MarkedString::Code { language, value } => ObjectBuilder::new()
                .field("language", language)
                .field("value", value)
                .build(),
        }
    }
}

impl Decodable for MarkedString {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(MarkedString::String(s.clone())),
            Value::Object(_) if value.has_key("language") && value.has_key("value") => {
                let fields = FieldReader::new(value)?;
                Ok(MarkedString::Code {
                    language: fields.required("language")?,
                    value: fields.required("value")?,
                })
            }
            _ => Err(DecodeError::unmatched_branch("MarkedString")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub contents: Vec<MarkedString>,
    pub range: Option<Range>,
}

impl Encodable for Hover {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("contents", &self.contents)
            .optional("range", &self.range)
            .build()
    }
}

impl Decodable for Hover {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            contents: fields.required("contents")?,
            range: fields.optional("range")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: Option<CompletionItemKind>,
    pub detail: Option<String>,
    pub documentation: Option<String>,
    pub sort_text: Option<String>,
    pub filter_text: Option<String>,
    pub insert_text: Option<String>,
    pub insert_text_format: Option<InsertTextFormat>,
    pub text_edit: Option<TextEdit>,
    pub additional_text_edits: Option<Vec<TextEdit>>,
    pub command: Option<Command>,
    /// Opaque payload the server gets back on `completionItem/resolve`.
    pub data: Option<Value>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: None,
            detail: None,
            documentation: None,
            sort_text: None,
            filter_text: None,
            insert_text: None,
            insert_text_format: None,
            text_edit: None,
            additional_text_edits: None,
            command: None,
            data: None,
        }
    }
}

impl Encodable for CompletionItem {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("label", &self.label)
            .optional("kind", &self.kind)
            .optional("detail", &self.detail)
            .optional("documentation", &self.documentation)
            .optional("sortText", &self.sort_text)
            .optional("filterText", &self.filter_text)
            .optional("insertText", &self.insert_text)
            .optional("insertTextFormat", &self.insert_text_format)
            .optional("textEdit", &self.text_edit)
            .optional("additionalTextEdits", &self.additional_text_edits)
            .optional("command", &self.command)
            .optional("data", &self.data)
            .build()
    }
}

impl Decodable for CompletionItem {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            label: fields.required("label")?,
            kind: fields.optional("kind")?,
            detail: fields.optional("detail")?,
            documentation: fields.optional("documentation")?,
            sort_text: fields.optional("sortText")?,
            filter_text: fields.optional("filterText")?,
            insert_text: fields.optional("insertText")?,
            insert_text_format: fields.optional("insertTextFormat")?,
            text_edit: fields.optional("textEdit")?,
            additional_text_edits: fields.optional("additionalTextEdits")?,
            command: fields.optional("command")?,
            data: fields.optional("data")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionList {
    pub is_incomplete: bool,
    pub items: Vec<CompletionItem>,
}

impl Encodable for CompletionList {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("isIncomplete", &self.is_incomplete)
            .field("items", &self.items)
            .build()
    }
}

impl Decodable for CompletionList {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            is_incomplete: fields.required("isIncomplete")?,
            items: fields.required("items")?,
        })
    }
}

/// `textDocument/completion` result: a bare item array or a full list.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionListResult {
    CompletionItems(Vec<CompletionItem>),
    CompletionList(CompletionList),
}

impl Encodable for CompletionListResult {
    fn encode(&self) -> Value {
        match self {
            CompletionListResult::CompletionItems(items) => items.encode(),
            CompletionListResult::CompletionList(list) => list.encode(),
        }
    }
}

impl Decodable for CompletionListResult {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Array(_) => Decodable::decode(value).map(CompletionListResult::CompletionItems),
            Value::Object(_) if value.has_key("items") => {
                CompletionList::decode(value).map(CompletionListResult::CompletionList)
            }
            _ => Err(DecodeError::unmatched_branch("CompletionListResult")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInformation {
    pub label: String,
    pub documentation: Option<String>,
}

impl Encodable for ParameterInformation {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("label", &self.label)
            .optional("documentation", &self.documentation)
            .build()
    }
}

impl Decodable for ParameterInformation {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            label: fields.required("label")?,
            documentation: fields.optional("documentation")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInformation {
    pub label: String,
    pub documentation: Option<String>,
    pub parameters: Option<Vec<ParameterInformation>>,
}

impl Encodable for SignatureInformation {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("label", &self.label)
            .optional("documentation", &self.documentation)
            .optional("parameters", &self.parameters)
            .build()
    }
}

impl Decodable for SignatureInformation {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            label: fields.required("label")?,
            documentation: fields.optional("documentation")?,
            parameters: fields.optional("parameters")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: Option<u32>,
    pub active_parameter: Option<u32>,
}

impl Encodable for SignatureHelp {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("signatures", &self.signatures)
            .optional("activeSignature", &self.active_signature)
            .optional("activeParameter", &self.active_parameter)
            .build()
    }
}

impl Decodable for SignatureHelp {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            signatures: fields.required("signatures")?,
            active_signature: fields.optional("activeSignature")?,
            active_parameter: fields.optional("activeParameter")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInformation {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
    pub container_name: Option<String>,
}

impl Encodable for SymbolInformation {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("location", &self.location)
            .optional("containerName", &self.container_name)
            .build()
    }
}

impl Decodable for SymbolInformation {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            name: fields.required("name")?,
            kind: fields.required("kind")?,
            location: fields.required("location")?,
            container_name: fields.optional("containerName")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHighlight {
    pub range: Range,
    pub kind: Option<DocumentHighlightKind>,
}

impl Encodable for DocumentHighlight {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("range", &self.range)
            .optional("kind", &self.kind)
            .build()
    }
}

impl Decodable for DocumentHighlight {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            range: fields.required("range")?,
            kind: fields.optional("kind")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub range: Range,
    pub target: Option<String>,
}

impl Encodable for DocumentLink {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("range", &self.range)
            .optional("target", &self.target)
            .build()
    }
}

impl Decodable for DocumentLink {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            range: fields.required("range")?,
            target: fields.optional("target")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeLens {
    pub range: Range,
    pub command: Option<Command>,
}

impl Encodable for CodeLens {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("range", &self.range)
            .optional("command", &self.command)
            .build()
    }
}

impl Decodable for CodeLens {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            range: fields.required("range")?,
            command: fields.optional("command")?,
        })
    }
}
