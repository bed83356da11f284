//! Method names as they appear on the wire.

pub const INITIALIZE: &str = "initialize";
pub const SHUTDOWN: &str = "shutdown";

pub const WINDOW_SHOW_MESSAGE: &str = "window/showMessage";
pub const WINDOW_SHOW_MESSAGE_REQUEST: &str = "window/showMessageRequest";
pub const WINDOW_LOG_MESSAGE: &str = "window/logMessage";
pub const TELEMETRY_EVENT: &str = "telemetry/event";

pub const CLIENT_REGISTER_CAPABILITY: &str = "client/registerCapability";
pub const CLIENT_UNREGISTER_CAPABILITY: &str = "client/unregisterCapability";

pub const WORKSPACE_SYMBOL: &str = "workspace/symbol";
pub const WORKSPACE_EXECUTE_COMMAND: &str = "workspace/executeCommand";
pub const WORKSPACE_APPLY_EDIT: &str = "workspace/applyEdit";

pub const COMPLETION_ITEM_RESOLVE: &str = "completionItem/resolve";
pub const CODE_LENS_RESOLVE: &str = "codeLens/resolve";
pub const DOCUMENT_LINK_RESOLVE: &str = "documentLink/resolve";

pub const TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";
pub const TEXT_DOCUMENT_WILL_SAVE_WAIT_UNTIL: &str = "textDocument/willSaveWaitUntil";
pub const TEXT_DOCUMENT_COMPLETION: &str = "textDocument/completion";
pub const TEXT_DOCUMENT_HOVER: &str = "textDocument/hover";
pub const TEXT_DOCUMENT_SIGNATURE_HELP: &str = "textDocument/signatureHelp";
pub const TEXT_DOCUMENT_REFERENCES: &str = "textDocument/references";
pub const TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT: &str = "textDocument/documentHighlight";
pub const TEXT_DOCUMENT_DOCUMENT_SYMBOL: &str = "textDocument/documentSymbol";
pub const TEXT_DOCUMENT_FORMATTING: &str = "textDocument/formatting";
pub const TEXT_DOCUMENT_RANGE_FORMATTING: &str = "textDocument/rangeFormatting";
pub const TEXT_DOCUMENT_ON_TYPE_FORMATTING: &str = "textDocument/onTypeFormatting";
pub const TEXT_DOCUMENT_DEFINITION: &str = "textDocument/definition";
pub const TEXT_DOCUMENT_CODE_ACTION: &str = "textDocument/codeAction";
pub const TEXT_DOCUMENT_CODE_LENS: &str = "textDocument/codeLens";
pub const TEXT_DOCUMENT_DOCUMENT_LINK: &str = "textDocument/documentLink";
pub const TEXT_DOCUMENT_RENAME: &str = "textDocument/rename";
