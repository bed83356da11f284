//! JSON-RPC 2.0 envelopes and the messages a language server exchanges
//! inside them.

pub mod envelope;
pub mod methods;

mod error;
mod message;
mod request;
mod response;

pub use error::{ErrorCode, ResponseError, ServerErrorCode};
pub use message::Message;
pub use request::ServerRequest;
pub use response::LanguageServerResponse;
