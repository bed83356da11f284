//! Everything a server sends back: responses to client requests plus its
//! one-way notifications.

use log::warn;

use crate::{
    codec::{Decodable, DecodeError, Encodable},
    config::TELEMETRY_UNSUPPORTED_MESSAGE,
    jsonrpc::{envelope, error::ResponseError, message::Message, methods},
    protocol::{
        CodeLens, Command, CompletionItem, CompletionListResult, DocumentHighlight, DocumentLink,
        Hover, InitializeResult, Location, LogMessageParams, MessageActionItem,
        PublishDiagnosticsParams, RequestId, ShowMessageParams, SignatureHelp, SymbolInformation,
        TextEdit, WorkspaceEdit,
    },
    value::Value,
};

/// One outgoing server message.
///
/// Result payloads are optional; `None` goes on the wire as `"result": null`
/// while `Some(vec![])` goes as `[]`.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageServerResponse {
    Initialize(RequestId, Option<InitializeResult>),
    Shutdown(RequestId),

    ShowMessageRequest(RequestId, Option<MessageActionItem>),

    ClientRegisterCapability(RequestId),
    ClientUnregisterCapability(RequestId),

    WorkspaceSymbol(RequestId, Option<Vec<SymbolInformation>>),
    WorkspaceExecuteCommand(RequestId),

    CompletionItemResolve(RequestId, Option<CompletionItem>),
    CodeLensResolve(RequestId, Option<CodeLens>),
    DocumentLinkResolve(RequestId, Option<DocumentLink>),

    TextDocumentWillSaveWaitUntil(RequestId, Option<Vec<TextEdit>>),
    TextDocumentCompletion(RequestId, Option<CompletionListResult>),
    TextDocumentHover(RequestId, Option<Hover>),
    TextDocumentSignatureHelp(RequestId, Option<SignatureHelp>),
    TextDocumentReferences(RequestId, Option<Vec<Location>>),
    TextDocumentDocumentHighlight(RequestId, Option<Vec<DocumentHighlight>>),
    TextDocumentDocumentSymbol(RequestId, Option<Vec<SymbolInformation>>),
    TextDocumentFormatting(RequestId, Option<Vec<TextEdit>>),
    TextDocumentRangeFormatting(RequestId, Option<Vec<TextEdit>>),
    TextDocumentOnTypeFormatting(RequestId, Option<Vec<TextEdit>>),
    TextDocumentDefinition(RequestId, Option<Vec<Location>>),
    TextDocumentCodeAction(RequestId, Option<Vec<Command>>),
    TextDocumentCodeLens(RequestId, Option<Vec<CodeLens>>),
    TextDocumentDocumentLink(RequestId, Option<Vec<DocumentLink>>),
    TextDocumentRename(RequestId, Option<WorkspaceEdit>),

    WindowShowMessage(ShowMessageParams),
    WindowLogMessage(LogMessageParams),
    TelemetryEvent(Value),
    TextDocumentPublishDiagnostics(PublishDiagnosticsParams),

    /// Failure of the request `id`; `None` when the id could not be read.
    Error(Option<RequestId>, ResponseError),
}

impl LanguageServerResponse {
    /// Method this message answers or notifies. `None` for [`Self::Error`].
    pub fn method(&self) -> Option<&'static str> {
        use LanguageServerResponse::*;

        Some(match self {
            Initialize(..) => methods::INITIALIZE,
            Shutdown(..) => methods::SHUTDOWN,
            ShowMessageRequest(..) => methods::WINDOW_SHOW_MESSAGE_REQUEST,
            ClientRegisterCapability(..) => methods::CLIENT_REGISTER_CAPABILITY,
            ClientUnregisterCapability(..) => methods::CLIENT_UNREGISTER_CAPABILITY,
            WorkspaceSymbol(..) => methods::WORKSPACE_SYMBOL,
            WorkspaceExecuteCommand(..) => methods::WORKSPACE_EXECUTE_COMMAND,
            CompletionItemResolve(..) => methods::COMPLETION_ITEM_RESOLVE,
            CodeLensResolve(..) => methods::CODE_LENS_RESOLVE,
            DocumentLinkResolve(..) => methods::DOCUMENT_LINK_RESOLVE,
            TextDocumentWillSaveWaitUntil(..) => methods::TEXT_DOCUMENT_WILL_SAVE_WAIT_UNTIL,
            TextDocumentCompletion(..) => methods::TEXT_DOCUMENT_COMPLETION,
            TextDocumentHover(..) => methods::TEXT_DOCUMENT_HOVER,
            TextDocumentSignatureHelp(..) => methods::TEXT_DOCUMENT_SIGNATURE_HELP,
            TextDocumentReferences(..) => methods::TEXT_DOCUMENT_REFERENCES,
            TextDocumentDocumentHighlight(..) => methods::TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT,
            TextDocumentDocumentSymbol(..) => methods::TEXT_DOCUMENT_DOCUMENT_SYMBOL,
            TextDocumentFormatting(..) => methods::TEXT_DOCUMENT_FORMATTING,
            TextDocumentRangeFormatting(..) => methods::TEXT_DOCUMENT_RANGE_FORMATTING,
            TextDocumentOnTypeFormatting(..) => methods::TEXT_DOCUMENT_ON_TYPE_FORMATTING,
            TextDocumentDefinition(..) => methods::TEXT_DOCUMENT_DEFINITION,
            TextDocumentCodeAction(..) => methods::TEXT_DOCUMENT_CODE_ACTION,
            TextDocumentCodeLens(..) => methods::TEXT_DOCUMENT_CODE_LENS,
            TextDocumentDocumentLink(..) => methods::TEXT_DOCUMENT_DOCUMENT_LINK,
            TextDocumentRename(..) => methods::TEXT_DOCUMENT_RENAME,
            WindowShowMessage(..) => methods::WINDOW_SHOW_MESSAGE,
            WindowLogMessage(..) => methods::WINDOW_LOG_MESSAGE,
            TelemetryEvent(..) => methods::TELEMETRY_EVENT,
            TextDocumentPublishDiagnostics(..) => methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS,
            Error(..) => return None,
        })
    }

    /// Request id this message answers. `None` for notifications.
    pub fn request_id(&self) -> Option<&RequestId> {
        use LanguageServerResponse::*;

        match self {
            Initialize(id, _)
            | Shutdown(id)
            | ShowMessageRequest(id, _)
            | ClientRegisterCapability(id)
            | ClientUnregisterCapability(id)
            | WorkspaceSymbol(id, _)
            | WorkspaceExecuteCommand(id)
            | CompletionItemResolve(id, _)
            | CodeLensResolve(id, _)
            | DocumentLinkResolve(id, _)
            | TextDocumentWillSaveWaitUntil(id, _)
            | TextDocumentCompletion(id, _)
            | TextDocumentHover(id, _)
            | TextDocumentSignatureHelp(id, _)
            | TextDocumentReferences(id, _)
            | TextDocumentDocumentHighlight(id, _)
            | TextDocumentDocumentSymbol(id, _)
            | TextDocumentFormatting(id, _)
            | TextDocumentRangeFormatting(id, _)
            | TextDocumentOnTypeFormatting(id, _)
            | TextDocumentDefinition(id, _)
            | TextDocumentCodeAction(id, _)
            | TextDocumentCodeLens(id, _)
            | TextDocumentDocumentLink(id, _)
            | TextDocumentRename(id, _) => Some(id),
            Error(id, _) => id.as_ref(),
            WindowShowMessage(_)
            | WindowLogMessage(_)
            | TelemetryEvent(_)
            | TextDocumentPublishDiagnostics(_) => None,
        }
    }

    /// Decodes the response to a request whose method was `method`.
    ///
    /// The wire response does not name its method, so the caller supplies the
    /// one it recorded when sending the request with this id.
    pub fn decode_response(method: &str, value: &Value) -> Result<Self, DecodeError> {
        use LanguageServerResponse::*;

        let (id, result) = match Message::decode(value)? {
            Message::Response { id, result } => (id, result),
            Message::ErrorResponse { id, error } => return Ok(Error(id, error)),
            _ => return Err(DecodeError::unmatched_branch("LanguageServerResponse")),
        };
        let result = &result;

        Ok(match method {
            methods::INITIALIZE => Initialize(id, payload(result)?),
            methods::SHUTDOWN => empty(result).map(|()| Shutdown(id))?,
            methods::WINDOW_SHOW_MESSAGE_REQUEST => ShowMessageRequest(id, payload(result)?),
            methods::CLIENT_REGISTER_CAPABILITY => {
                empty(result).map(|()| ClientRegisterCapability(id))?
            }
            methods::CLIENT_UNREGISTER_CAPABILITY => {
                empty(result).map(|()| ClientUnregisterCapability(id))?
            }
            methods::WORKSPACE_SYMBOL => WorkspaceSymbol(id, payload(result)?),
            methods::WORKSPACE_EXECUTE_COMMAND => {
                empty(result).map(|()| WorkspaceExecuteCommand(id))?
            }
            methods::COMPLETION_ITEM_RESOLVE => CompletionItemResolve(id, payload(result)?),
            methods::CODE_LENS_RESOLVE => CodeLensResolve(id, payload(result)?),
            methods::DOCUMENT_LINK_RESOLVE => DocumentLinkResolve(id, payload(result)?),
            methods::TEXT_DOCUMENT_WILL_SAVE_WAIT_UNTIL => {
                TextDocumentWillSaveWaitUntil(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_COMPLETION => TextDocumentCompletion(id, payload(result)?),
            methods::TEXT_DOCUMENT_HOVER => TextDocumentHover(id, payload(result)?),
            methods::TEXT_DOCUMENT_SIGNATURE_HELP => {
                TextDocumentSignatureHelp(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_REFERENCES => TextDocumentReferences(id, payload(result)?),
            methods::TEXT_DOCUMENT_DOCUMENT_HIGHLIGHT => {
                TextDocumentDocumentHighlight(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_DOCUMENT_SYMBOL => {
                TextDocumentDocumentSymbol(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_FORMATTING => TextDocumentFormatting(id, payload(result)?),
            methods::TEXT_DOCUMENT_RANGE_FORMATTING => {
                TextDocumentRangeFormatting(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_ON_TYPE_FORMATTING => {
                TextDocumentOnTypeFormatting(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_DEFINITION => TextDocumentDefinition(id, payload(result)?),
            methods::TEXT_DOCUMENT_CODE_ACTION => TextDocumentCodeAction(id, payload(result)?),
            methods::TEXT_DOCUMENT_CODE_LENS => TextDocumentCodeLens(id, payload(result)?),
            methods::TEXT_DOCUMENT_DOCUMENT_LINK => {
                TextDocumentDocumentLink(id, payload(result)?)
            }
            methods::TEXT_DOCUMENT_RENAME => TextDocumentRename(id, payload(result)?),
            _ => return Err(DecodeError::unmatched_branch("LanguageServerResponse")),
        })
    }

    /// Decodes one of the server's one-way notifications.
    ///
    /// `telemetry/event` is accepted in its conformant notification form.
    pub fn decode_notification(value: &Value) -> Result<Self, DecodeError> {
        use LanguageServerResponse::*;

        let Message::Notification { method, params } = Message::decode(value)? else {
            return Err(DecodeError::unmatched_branch("LanguageServerResponse"));
        };
        let params = params.as_ref();

        Ok(match method.as_str() {
            methods::WINDOW_SHOW_MESSAGE => WindowShowMessage(required_params(params)?),
            methods::WINDOW_LOG_MESSAGE => WindowLogMessage(required_params(params)?),
            methods::TELEMETRY_EVENT => TelemetryEvent(required_params(params)?),
            methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS => {
                TextDocumentPublishDiagnostics(required_params(params)?)
            }
            _ => {
                return Err(DecodeError::unmatched_branch("LanguageServerResponse").within("method"))
            }
        })
    }
}

fn respond<T: Encodable>(id: &RequestId, result: &Option<T>) -> Value {
    envelope::response(id, result.as_ref().map_or(Value::Null, Encodable::encode))
}

fn payload<T: Decodable>(result: &Value) -> Result<Option<T>, DecodeError> {
    match result {
        Value::Null => Ok(None),
        other => T::decode(other).map(Some).map_err(|e| e.within("result")),
    }
}

fn empty(result: &Value) -> Result<(), DecodeError> {
    match result {
        Value::Null => Ok(()),
        other => Err(DecodeError::type_mismatch("null", other).within("result")),
    }
}

fn required_params<T: Decodable>(params: Option<&Value>) -> Result<T, DecodeError> {
    match params {
        Some(params) => T::decode(params).map_err(|e| e.within("params")),
        None => Err(DecodeError::missing_field().within("params")),
    }
}

impl Encodable for LanguageServerResponse {
    fn encode(&self) -> Value {
        use LanguageServerResponse::*;

        match self {
            Initialize(id, result) => respond(id, result),
            Shutdown(id)
            | ClientRegisterCapability(id)
            | ClientUnregisterCapability(id)
            | WorkspaceExecuteCommand(id) => envelope::response(id, Value::Null),

            ShowMessageRequest(id, result) => respond(id, result),

            WorkspaceSymbol(id, result) | TextDocumentDocumentSymbol(id, result) => {
                respond(id, result)
            }

            CompletionItemResolve(id, result) => respond(id, result),
            CodeLensResolve(id, result) => respond(id, result),
            DocumentLinkResolve(id, result) => respond(id, result),

            TextDocumentWillSaveWaitUntil(id, result)
            | TextDocumentFormatting(id, result)
            | TextDocumentRangeFormatting(id, result)
            | TextDocumentOnTypeFormatting(id, result) => respond(id, result),
            TextDocumentCompletion(id, result) => respond(id, result),
            TextDocumentHover(id, result) => respond(id, result),
            TextDocumentSignatureHelp(id, result) => respond(id, result),
            TextDocumentReferences(id, result) | TextDocumentDefinition(id, result) => {
                respond(id, result)
            }
            TextDocumentDocumentHighlight(id, result) => respond(id, result),
            TextDocumentCodeAction(id, result) => respond(id, result),
            TextDocumentCodeLens(id, result) => respond(id, result),
            TextDocumentDocumentLink(id, result) => respond(id, result),
            TextDocumentRename(id, result) => respond(id, result),

            WindowShowMessage(params) => {
                envelope::notification(methods::WINDOW_SHOW_MESSAGE, params.encode())
            }
            WindowLogMessage(params) => {
                envelope::notification(methods::WINDOW_LOG_MESSAGE, params.encode())
            }
            TelemetryEvent(_) => {
                warn!("{} is not supported; sending placeholder payload", methods::TELEMETRY_EVENT);
                Value::object([("message", Value::from(TELEMETRY_UNSUPPORTED_MESSAGE))])
            }
            TextDocumentPublishDiagnostics(params) => envelope::notification(
                methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS,
                params.encode(),
            ),

            Error(id, error) => envelope::error_response(id.as_ref(), error),
        }
    }
}
