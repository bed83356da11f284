pub mod basic;
pub mod capabilities;
pub mod diagnostics;
pub mod document;
pub mod kinds;
pub mod language;
pub mod window;

pub use basic::{
    Command, Location, Position, Range, RequestId, TextDocumentEdit, TextEdit,
    VersionedTextDocumentIdentifier, WorkspaceEdit,
};
pub use capabilities::{
    CodeLensOptions, CompletionOptions, DocumentLinkOptions, DocumentOnTypeFormattingOptions,
    ExecuteCommandOptions, InitializeResult, SaveOptions, ServerCapabilities,
    SignatureHelpOptions, TextDocumentSync, TextDocumentSyncOptions,
};
pub use diagnostics::{Diagnostic, DiagnosticCode, PublishDiagnosticsParams};
pub use document::{
    DidOpenTextDocumentParams, ReferenceContext, ReferenceParams, TextDocumentIdentifier,
    TextDocumentItem, TextDocumentPositionParams,
};
pub use kinds::{
    CompletionItemKind, DiagnosticSeverity, DocumentHighlightKind, InsertTextFormat, MessageType,
    SymbolKind, TextDocumentSyncKind,
};
pub use language::{
    CodeLens, CompletionItem, CompletionList, CompletionListResult, DocumentHighlight,
    DocumentLink, Hover, MarkedString, ParameterInformation, SignatureHelp, SignatureInformation,
    SymbolInformation,
};
pub use window::{
    ApplyWorkspaceEditParams, DidChangeConfigurationParams, LogMessageParams, MessageActionItem,
    Registration, RegistrationParams, ShowMessageParams, ShowMessageRequestParams,
    Unregistration, UnregistrationParams,
};
