//! Messages, registrations and configuration exchanged outside any document.

use crate::{
    codec::{Decodable, DecodeError, Encodable, FieldReader, ObjectBuilder},
    protocol::{basic::WorkspaceEdit, kinds::MessageType},
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMessageParams {
    pub message_type: MessageType,
    pub message: String,
}

impl Encodable for ShowMessageParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("type", &self.message_type)
            .field("message", &self.message)
            .build()
    }
}

impl Decodable for ShowMessageParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            message_type: fields.required("type")?,
            message: fields.required("message")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessageParams {
    pub message_type: MessageType,
    pub message: String,
}

impl Encodable for LogMessageParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("type", &self.message_type)
            .field("message", &self.message)
            .build()
    }
}

impl Decodable for LogMessageParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            message_type: fields.required("type")?,
            message: fields.required("message")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageActionItem {
    pub title: String,
}

impl Encodable for MessageActionItem {
    fn encode(&self) -> Value {
        ObjectBuilder::new().field("title", &self.title).build()
    }
}

impl Decodable for MessageActionItem {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            title: fields.required("title")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowMessageRequestParams {
    pub message_type: MessageType,
    pub message: String,
    pub actions: Option<Vec<MessageActionItem>>,
}

impl Encodable for ShowMessageRequestParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("type", &self.message_type)
            .field("message", &self.message)
            .optional("actions", &self.actions)
            .build()
    }
}

impl Decodable for ShowMessageRequestParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            message_type: fields.required("type")?,
            message: fields.required("message")?,
            actions: fields.optional("actions")?,
        })
    }
}

/// Dynamic registration of a capability for `method`.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: String,
    pub method: String,
    pub register_options: Option<Value>,
}

impl Encodable for Registration {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("id", &self.id)
            .field("method", &self.method)
            .optional("registerOptions", &self.register_options)
            .build()
    }
}

impl Decodable for Registration {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            id: fields.required("id")?,
            method: fields.required("method")?,
            register_options: fields.optional("registerOptions")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationParams {
    pub registrations: Vec<Registration>,
}

impl Encodable for RegistrationParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("registrations", &self.registrations)
            .build()
    }
}

impl Decodable for RegistrationParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            registrations: fields.required("registrations")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregistration {
    pub id: String,
    pub method: String,
}

impl Encodable for Unregistration {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("id", &self.id)
            .field("method", &self.method)
            .build()
    }
}

impl Decodable for Unregistration {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            id: fields.required("id")?,
            method: fields.required("method")?,
        })
    }
}

/// The wire key keeps the protocol's historical spelling `unregisterations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregistrationParams {
    pub unregistrations: Vec<Unregistration>,
}

impl Encodable for UnregistrationParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .field("unregisterations", &self.unregistrations)
            .build()
    }
}

impl Decodable for UnregistrationParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            unregistrations: fields.required("unregisterations")?,
        })
    }
}

/// `workspace/didChangeConfiguration` params.
///
/// The settings value is the whole params payload; there is no wrapping
/// `settings` key.
#[derive(Debug, Clone, PartialEq)]
pub struct DidChangeConfigurationParams {
    pub settings: Value,
}

impl Encodable for DidChangeConfigurationParams {
    fn encode(&self) -> Value {
        self.settings.clone()
    }
}

impl Decodable for DidChangeConfigurationParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        Ok(Self {
            settings: value.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyWorkspaceEditParams {
    pub label: Option<String>,
    pub edit: WorkspaceEdit,
}

impl Encodable for ApplyWorkspaceEditParams {
    fn encode(&self) -> Value {
        ObjectBuilder::new()
            .optional("label", &self.label)
            .field("edit", &self.edit)
            .build()
    }
}

impl Decodable for ApplyWorkspaceEditParams {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let fields = FieldReader::new(value)?;
        Ok(Self {
            label: fields.optional("label")?,
            edit: fields.required("edit")?,
        })
    }
}
