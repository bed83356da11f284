pub mod codec;
pub mod config;
pub mod jsonrpc;
pub mod protocol;
pub mod value;
pub mod wire;

pub use codec::{Decodable, DecodeError, Encodable, FieldPath};
pub use jsonrpc::{LanguageServerResponse, Message, ResponseError, ServerRequest};
pub use value::{ParseError, Value};
