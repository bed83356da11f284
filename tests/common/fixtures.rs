use std::collections::BTreeMap;

use lsp_wire::protocol::{
    CodeLens, CodeLensOptions, Command, CompletionItem, CompletionItemKind, CompletionOptions,
    Diagnostic, DiagnosticCode, DiagnosticSeverity, DocumentHighlight, DocumentHighlightKind,
    DocumentLink, DocumentLinkOptions, DocumentOnTypeFormattingOptions, ExecuteCommandOptions,
    Hover, InitializeResult, InsertTextFormat, Location, MarkedString, ParameterInformation,
    Position, Range, SaveOptions, ServerCapabilities, SignatureHelp, SignatureHelpOptions,
    SignatureInformation, SymbolInformation, SymbolKind, TextDocumentEdit, TextDocumentSync,
    TextDocumentSyncKind, TextDocumentSyncOptions, TextEdit, VersionedTextDocumentIdentifier,
    WorkspaceEdit,
};
use serde_json::json;

pub const MAIN_RS: &str = "file:///workspace/src/main.rs";

pub fn range(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Range {
    Range::new(
        Position::new(start_line, start_char),
        Position::new(end_line, end_char),
    )
}

pub fn location() -> Location {
    Location {
        uri: MAIN_RS.to_string(),
        range: range(10, 4, 10, 9),
    }
}

pub fn text_edit() -> TextEdit {
    TextEdit {
        range: range(2, 0, 2, 5),
        new_text: "greet".to_string(),
    }
}

pub fn command() -> Command {
    Command {
        title: "Run test".to_string(),
        command: "rust-analyzer.runSingle".to_string(),
        arguments: Some(vec![json!({"label": "test_greet"}).into()]),
    }
}

pub fn diagnostic() -> Diagnostic {
    Diagnostic {
        severity: Some(DiagnosticSeverity::Warning),
        code: Some(DiagnosticCode::String("unused_variables".to_string())),
        source: Some("rustc".to_string()),
        ..Diagnostic::new(range(5, 8, 5, 12), "unused variable: `calc`")
    }
}

pub fn completion_item() -> CompletionItem {
    CompletionItem {
        kind: Some(CompletionItemKind::Function),
        detail: Some("fn greet(name: &str) -> String".to_string()),
        insert_text: Some("greet(${1:name})".to_string()),
        insert_text_format: Some(InsertTextFormat::Snippet),
        data: Some(json!({"position": {"line": 1, "character": 4}}).into()),
        ..CompletionItem::new("greet")
    }
}

pub fn hover() -> Hover {
    Hover {
        contents: vec![
            MarkedString::Code {
                language: "rust".to_string(),
                value: "fn greet(name: &str) -> String".to_string(),
            },
            MarkedString::String("Builds a greeting.".to_string()),
        ],
        range: Some(range(1, 18, 1, 23)),
    }
}

pub fn signature_help() -> SignatureHelp {
    SignatureHelp {
        signatures: vec![SignatureInformation {
            label: "add(&self, a: i32, b: i32) -> i32".to_string(),
            documentation: None,
            parameters: None,
        }],
        active_signature: Some(0),
        active_parameter: Some(1),
    }
}

pub fn symbol() -> SymbolInformation {
    SymbolInformation {
        name: "Calculator".to_string(),
        kind: SymbolKind::Struct,
        location: location(),
        container_name: None,
    }
}

pub fn highlight() -> DocumentHighlight {
    DocumentHighlight {
        range: range(4, 8, 4, 12),
        kind: Some(DocumentHighlightKind::Write),
    }
}

pub fn document_link() -> DocumentLink {
    DocumentLink {
        range: range(0, 0, 0, 10),
        target: Some("https://docs.rs".to_string()),
    }
}

pub fn code_lens() -> CodeLens {
    CodeLens {
        range: range(40, 4, 40, 19),
        command: Some(command()),
    }
}

pub fn changes_edit() -> WorkspaceEdit {
    let mut changes = BTreeMap::new();
    changes.insert(MAIN_RS.to_string(), vec![text_edit()]);
    WorkspaceEdit::Changes(changes)
}

pub fn document_changes_edit() -> WorkspaceEdit {
    WorkspaceEdit::DocumentChanges(vec![TextDocumentEdit {
        text_document: VersionedTextDocumentIdentifier {
            uri: MAIN_RS.to_string(),
            version: 4,
        },
        edits: vec![text_edit()],
    }])
}

pub fn initialize_result() -> InitializeResult {
    InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSync::Kind(TextDocumentSyncKind::Incremental)),
            hover_provider: Some(true),
            completion_provider: Some(CompletionOptions {
                resolve_provider: Some(true),
                trigger_characters: Some(vec![".".to_string(), ":".to_string()]),
            }),
            definition_provider: Some(true),
            code_lens_provider: Some(CodeLensOptions {
                resolve_provider: Some(false),
            }),
            ..ServerCapabilities::default()
        },
    }
}

/// Every capability set, with sync announced through the options branch.
pub fn full_capabilities() -> InitializeResult {
    InitializeResult {
        capabilities: ServerCapabilities {
            text_document_sync: Some(TextDocumentSync::Options(TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::Full),
                will_save: Some(false),
                will_save_wait_until: Some(false),
                save: Some(SaveOptions {
                    include_text: Some(true),
                }),
            })),
            signature_help_provider: Some(SignatureHelpOptions {
                trigger_characters: Some(vec!["(".to_string(), ",".to_string()]),
            }),
            references_provider: Some(true),
            document_highlight_provider: Some(true),
            document_symbol_provider: Some(true),
            workspace_symbol_provider: Some(true),
            code_action_provider: Some(true),
            document_formatting_provider: Some(true),
            document_range_formatting_provider: Some(false),
            document_on_type_formatting_provider: Some(DocumentOnTypeFormattingOptions {
                first_trigger_character: "=".to_string(),
                more_trigger_character: Some(vec![".".to_string(), ">".to_string()]),
            }),
            rename_provider: Some(true),
            document_link_provider: Some(DocumentLinkOptions {
                resolve_provider: Some(true),
            }),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: Some(vec!["rust-analyzer.runSingle".to_string()]),
            }),
            ..initialize_result().capabilities
        },
    }
}

pub fn signature_information() -> SignatureInformation {
    SignatureInformation {
        label: "add(&self, a: i32, b: i32) -> i32".to_string(),
        documentation: Some("Adds two numbers.".to_string()),
        parameters: Some(vec![
            ParameterInformation {
                label: "a: i32".to_string(),
                documentation: Some("Left operand.".to_string()),
            },
            ParameterInformation {
                label: "b: i32".to_string(),
                documentation: None,
            },
        ]),
    }
}

/// Draft-07 schema accepting exactly the four JSON-RPC 2.0 message shapes.
pub fn jsonrpc_schema() -> serde_json::Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["jsonrpc"],
        "properties": {
            "jsonrpc": {"const": "2.0"},
            "id": {"type": ["integer", "string", "null"]}
        },
        "oneOf": [
            {
                "required": ["method"],
                "properties": {
                    "method": {"type": "string"},
                    "params": {"type": ["object", "array"]}
                },
                "not": {"anyOf": [{"required": ["result"]}, {"required": ["error"]}]}
            },
            {
                "required": ["id", "result"],
                "not": {"anyOf": [{"required": ["method"]}, {"required": ["error"]}]}
            },
            {
                "required": ["id", "error"],
                "properties": {
                    "error": {
                        "type": "object",
                        "required": ["code", "message"],
                        "properties": {
                            "code": {"type": "integer"},
                            "message": {"type": "string"}
                        }
                    }
                },
                "not": {"anyOf": [{"required": ["method"]}, {"required": ["result"]}]}
            }
        ]
    })
}
