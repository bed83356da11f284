use crate::{
    codec::{Decodable, DecodeError, Encodable},
    jsonrpc::{envelope, message::Message, methods},
    protocol::{
        ApplyWorkspaceEditParams, RegistrationParams, RequestId, ShowMessageRequestParams,
        UnregistrationParams,
    },
    value::Value,
};

/// Requests the server initiates towards the client.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerRequest {
    ShowMessageRequest(RequestId, ShowMessageRequestParams),
    RegisterCapability(RequestId, RegistrationParams),
    UnregisterCapability(RequestId, UnregistrationParams),
    ApplyEdit(RequestId, ApplyWorkspaceEditParams),
}

impl ServerRequest {
    pub fn method(&self) -> &'static str {
        match self {
            ServerRequest::ShowMessageRequest(..) => methods::WINDOW_SHOW_MESSAGE_REQUEST,
            ServerRequest::RegisterCapability(..) => methods::CLIENT_REGISTER_CAPABILITY,
            ServerRequest::UnregisterCapability(..) => methods::CLIENT_UNREGISTER_CAPABILITY,
            ServerRequest::ApplyEdit(..) => methods::WORKSPACE_APPLY_EDIT,
        }
    }

    pub fn id(&self) -> &RequestId {
        match self {
            ServerRequest::ShowMessageRequest(id, _)
            | ServerRequest::RegisterCapability(id, _)
            | ServerRequest::UnregisterCapability(id, _)
            | ServerRequest::ApplyEdit(id, _) => id,
        }
    }

    fn params(&self) -> Value {
        match self {
            ServerRequest::ShowMessageRequest(_, params) => params.encode(),
            ServerRequest::RegisterCapability(_, params) => params.encode(),
            ServerRequest::UnregisterCapability(_, params) => params.encode(),
            ServerRequest::ApplyEdit(_, params) => params.encode(),
        }
    }
}

impl Encodable for ServerRequest {
    fn encode(&self) -> Value {
        envelope::request(self.id(), self.method(), self.params())
    }
}

impl Decodable for ServerRequest {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let Message::Request { id, method, params } = Message::decode(value)? else {
            return Err(DecodeError::unmatched_branch("ServerRequest"));
        };
        let params = params.as_ref();

        fn typed<T: Decodable>(params: Option<&Value>) -> Result<T, DecodeError> {
            let params = params.ok_or_else(|| DecodeError::missing_field().within("params"))?;
            T::decode(params).map_err(|e| e.within("params"))
        }

        Ok(match method.as_str() {
            methods::WINDOW_SHOW_MESSAGE_REQUEST => {
                ServerRequest::ShowMessageRequest(id, typed(params)?)
            }
            methods::CLIENT_REGISTER_CAPABILITY => {
                ServerRequest::RegisterCapability(id, typed(params)?)
            }
            methods::CLIENT_UNREGISTER_CAPABILITY => {
                ServerRequest::UnregisterCapability(id, typed(params)?)
            }
            methods::WORKSPACE_APPLY_EDIT => ServerRequest::ApplyEdit(id, typed(params)?),
            _ => return Err(DecodeError::unmatched_branch("ServerRequest").within("method")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{MessageType, Registration};

    #[test]
    fn register_capability_uses_request_envelope() {
        let request = ServerRequest::RegisterCapability(
            RequestId::from(3),
            RegistrationParams {
                registrations: vec![Registration {
                    id: "r1".into(),
                    method: "workspace/didChangeConfiguration".into(),
                    register_options: None,
                }],
            },
        );

        let encoded = request.encode();
        assert_eq!(
            encoded.to_json_string(),
            r#"{"id":3,"jsonrpc":"2.0","method":"client/registerCapability","params":{"registrations":[{"id":"r1","method":"workspace/didChangeConfiguration"}]}}"#
        );
        assert_eq!(ServerRequest::decode(&encoded), Ok(request));
    }

    #[test]
    fn missing_params_reported_under_params() {
        let value = Value::parse(
            r#"{"jsonrpc":"2.0","id":1,"method":"window/showMessageRequest"}"#,
        )
        .unwrap();
        let err = ServerRequest::decode(&value).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRequiredField { .. }));
        assert_eq!(err.path().to_string(), "$.params");
    }

    #[test]
    fn unknown_method_rejected() {
        let request = ServerRequest::ShowMessageRequest(
            RequestId::from("a"),
            ShowMessageRequestParams {
                message_type: MessageType::Info,
                message: "?".into(),
                actions: None,
            },
        );
        let mut encoded = request.encode();
        if let Value::Object(map) = &mut encoded {
            map.insert("method".into(), Value::from("window/other"));
        }
        let err = ServerRequest::decode(&encoded).unwrap_err();
        assert_eq!(err.path().to_string(), "$.method");
    }
}
