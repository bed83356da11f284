//! What the server announces in its `initialize` result.

use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    protocol::kinds::TextDocumentSyncKind,
    value::Value,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    pub include_text: Option<bool>,
}

impl Encodable for SaveOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("includeText", &self.include_text)
            .build()
    }
}

impl Decodable for SaveOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            include_text: fields.optional("includeText")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextDocumentSyncOptions {
    pub open_close: Option<bool>,
    pub change: Option<TextDocumentSyncKind>,
    pub will_save: Option<bool>,
    pub will_save_wait_until: Option<bool>,
    pub save: Option<SaveOptions>,
}

impl Encodable for TextDocumentSyncOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("openClose", &self.open_close)
            .optional("change", &self.change)
            .optional("willSave", &self.will_save)
            .optional("willSaveWaitUntil", &self.will_save_wait_until)
            .optional("save", &self.save)
            .build()
    }
}

impl Decodable for TextDocumentSyncOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            open_close: fields.optional("openClose")?,
            change: fields.optional("change")?,
            will_save: fields.optional("willSave")?,
            will_save_wait_until: fields.optional("willSaveWaitUntil")?,
            save: fields.optional("save")?,
        })
    }
}

/// Either a bare sync kind code or a full options record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDocumentSync {
    Kind(TextDocumentSyncKind),
    Options(TextDocumentSyncOptions),
}

impl Encodable for TextDocumentSync {
    fn encode(&self) -> Value {
        match self {
            TextDocumentSync::Kind(kind) => kind.encode(),
            TextDocumentSync::Options(options) => options.encode(),
        }
    }
}

impl Decodable for TextDocumentSync {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Number(_) => TextDocumentSyncKind::decode(value).map(TextDocumentSync::Kind),
            Value::Object(_) => {
                TextDocumentSyncOptions::decode(value).map(TextDocumentSync::Options)
            }
            _ => Err(DecodeError::unmatched_branch("TextDocumentSync")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionOptions {
    pub resolve_provider: Option<bool>,
    pub trigger_characters: Option<Vec<String>>,
}

impl Encodable for CompletionOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("resolveProvider", &self.resolve_provider)
            .optional("triggerCharacters", &self.trigger_characters)
            .build()
    }
}

impl Decodable for CompletionOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            resolve_provider: fields.optional("resolveProvider")?,
            trigger_characters: fields.optional("triggerCharacters")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureHelpOptions {
    pub trigger_characters: Option<Vec<String>>,
}

impl Encodable for SignatureHelpOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("triggerCharacters", &self.trigger_characters)
            .build()
    }
}

impl Decodable for SignatureHelpOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            trigger_characters: fields.optional("triggerCharacters")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeLensOptions {
    pub resolve_provider: Option<bool>,
}

impl Encodable for CodeLensOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("resolveProvider", &self.resolve_provider)
            .build()
    }
}

impl Decodable for CodeLensOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            resolve_provider: fields.optional("resolveProvider")?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentLinkOptions {
    pub resolve_provider: Option<bool>,
}

impl Encodable for DocumentLinkOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("resolveProvider", &self.resolve_provider)
            .build()
    }
}

impl Decodable for DocumentLinkOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            resolve_provider: fields.optional("resolveProvider")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOnTypeFormattingOptions {
    pub first_trigger_character: String,
    pub more_trigger_character: Option<Vec<String>>,
}

impl Encodable for DocumentOnTypeFormattingOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("firstTriggerCharacter", &self.first_trigger_character)
            .optional("moreTriggerCharacter", &self.more_trigger_character)
            .build()
    }
}

impl Decodable for DocumentOnTypeFormattingOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            first_trigger_character: fields.required("firstTriggerCharacter")?,
            more_trigger_character: fields.optional("moreTriggerCharacter")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteCommandOptions {
    pub commands: Option<Vec<String>>,
}

impl Encodable for ExecuteCommandOptions {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("commands", &self.commands)
            .build()
    }
}

impl Decodable for ExecuteCommandOptions {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            commands: fields.optional("commands")?,
        })
    }
}

/// Every capability is optional; an unset capability is not advertised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerCapabilities {
    pub text_document_sync: Option<TextDocumentSync>,
    pub hover_provider: Option<bool>,
    pub completion_provider: Option<CompletionOptions>,
    pub signature_help_provider: Option<SignatureHelpOptions>,
    pub definition_provider: Option<bool>,
    pub references_provider: Option<bool>,
    pub document_highlight_provider: Option<bool>,
    pub document_symbol_provider: Option<bool>,
    pub workspace_symbol_provider: Option<bool>,
    pub code_action_provider: Option<bool>,
    pub code_lens_provider: Option<CodeLensOptions>,
    pub document_formatting_provider: Option<bool>,
    pub document_range_formatting_provider: Option<bool>,
    pub document_on_type_formatting_provider: Option<DocumentOnTypeFormattingOptions>,
    pub rename_provider: Option<bool>,
    pub document_link_provider: Option<DocumentLinkOptions>,
    pub execute_command_provider: Option<ExecuteCommandOptions>,
}

impl Encodable for ServerCapabilities {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("textDocumentSync", &self.text_document_sync)
            .optional("hoverProvider", &self.hover_provider)
            .optional("completionProvider", &self.completion_provider)
            .optional("signatureHelpProvider", &self.signature_help_provider)
            .optional("definitionProvider", &self.definition_provider)
            .optional("referencesProvider", &self.references_provider)
            .optional("documentHighlightProvider", &self.document_highlight_provider)
            .optional("documentSymbolProvider", &self.document_symbol_provider)
            .optional("workspaceSymbolProvider", &self.workspace_symbol_provider)
            .optional("codeActionProvider", &self.code_action_provider)
            .optional("codeLensProvider", &self.code_lens_provider)
            .optional("documentFormattingProvider", &self.document_formatting_provider)
            .optional(
                "documentRangeFormattingProvider",
                &self.document_range_formatting_provider,
            )
            .optional(
                "documentOnTypeFormattingProvider",
                &self.document_on_type_formatting_provider,
            )
            .optional("renameProvider", &self.rename_provider)
            .optional("documentLinkProvider", &self.document_link_provider)
            .optional("executeCommandProvider", &self.execute_command_provider)
            .build()
    }
}

impl Decodable for ServerCapabilities {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            text_document_sync: fields.optional("textDocumentSync")?,
            hover_provider: fields.optional("hoverProvider")?,
            completion_provider: fields.optional("completionProvider")?,
            signature_help_provider: fields.optional("signatureHelpProvider")?,
            definition_provider: fields.optional("definitionProvider")?,
            references_provider: fields.optional("referencesProvider")?,
            document_highlight_provider: fields.optional("documentHighlightProvider")?,
            document_symbol_provider: fields.optional("documentSymbolProvider")?,
            workspace_symbol_provider: fields.optional("workspaceSymbolProvider")?,
            code_action_provider: fields.optional("codeActionProvider")?,
            code_lens_provider: fields.optional("codeLensProvider")?,
            document_formatting_provider: fields.optional("documentFormattingProvider")?,
            document_range_formatting_provider: fields
                .optional("documentRangeFormattingProvider")?,
            document_on_type_formatting_provider: fields
                .optional("documentOnTypeFormattingProvider")?,
            rename_provider: fields.optional("renameProvider")?,
            document_link_provider: fields.optional("documentLinkProvider")?,
            execute_command_provider: fields.optional("executeCommandProvider")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializeResult {
    pub capabilities: ServerCapabilities,
}

impl Encodable for InitializeResult {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("capabilities", &self.capabilities)
            .build()
    }
}

impl Decodable for InitializeResult {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            capabilities: fields.required("capabilities")?,
        })
    }
}
