//! Line-oriented inspection of raw wire messages.

use log::{debug, warn};

use crate::{
    codec::{Decodable, Encodable},
    jsonrpc::{envelope, ErrorCode, Message, ResponseError},
    protocol::RequestId,
    value::Value,
};

/// Re-encodes one JSON-RPC document in canonical form.
///
/// Text that is not JSON becomes a `ParseError` response with a `null` id.
/// JSON that is not a JSON-RPC message becomes an `InvalidRequest` response
/// carrying the decode error as `data`, addressed to the document's id when
/// one can be read.
pub fn canonicalize(text: &str) -> Value {
    let value = match Value::parse(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Rejecting malformed document: {}", e);
            let error = ResponseError::new(ErrorCode::ParseError, e.to_string());
            return envelope::error_response(None, &error);
        }
    };

    match Message::decode(&value) {
        Ok(message) => {
            debug!("Decoded {}", message);
            message.encode()
        }
        Err(e) => {
            warn!("Rejecting invalid message: {}", e);
            let id = value.get("id").and_then(|id| RequestId::decode(id).ok());
            let error = ResponseError::new(ErrorCode::InvalidRequest, "Invalid Request")
                .with_data(Value::from(e.to_string()));
            envelope::error_response(id.as_ref(), &error)
        }
    }
}
