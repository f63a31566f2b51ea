//! Input and payload validation failures.

use serde_json::Value;

use crate::base::ErrorCause;

/// A call argument failed validation. Tag `InvalidArgumentError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidArgumentError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub parameter: String,
    pub value: Value,
}

impl InvalidArgumentError {
    pub fn new(parameter: impl Into<String>, value: impl Into<Value>, reason: &str) -> Self {
        let parameter = parameter.into();
        Self {
            message: format!("invalid argument for parameter {parameter}: {reason}"),
            cause: None,
            parameter,
            value: value.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// The prompt did not have a usable shape. Tag `InvalidPromptError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidPromptError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub prompt: Value,
}

impl InvalidPromptError {
    pub fn new(prompt: impl Into<Value>, reason: &str) -> Self {
        Self {
            message: format!("invalid prompt: {reason}"),
            cause: None,
            prompt: prompt.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// A message carried a role the model surface does not accept.
/// Tag `InvalidMessageRoleError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidMessageRoleError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub role: String,
}

impl InvalidMessageRoleError {
    pub fn new(role: impl Into<String>) -> Self {
        let role = role.into();
        Self {
            message: format!("invalid message role: {role}"),
            cause: None,
            role,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Attachment or file content was not in an accepted encoding.
/// Tag `InvalidDataContentError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidDataContentError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub content: Value,
}

impl InvalidDataContentError {
    pub fn new(content: impl Into<Value>) -> Self {
        Self {
            message: "invalid data content".to_string(),
            cause: None,
            content: content.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// The provider answered with a payload the adapter cannot interpret.
/// Tag `InvalidResponseDataError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidResponseDataError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub data: Value,
}

impl InvalidResponseDataError {
    pub fn new(data: impl Into<Value>) -> Self {
        let data = data.into();
        Self {
            message: format!("invalid response data: {data}"),
            cause: None,
            data,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// A streamed chunk did not match the stream protocol. Tag `InvalidStreamPartError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidStreamPartError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub chunk: Value,
}

impl InvalidStreamPartError {
    pub fn new(chunk: impl Into<Value>, reason: &str) -> Self {
        Self {
            message: format!("invalid stream part: {reason}"),
            cause: None,
            chunk: chunk.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Text that was expected to be JSON failed to parse. Tag `JSONParseError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct JsonParseError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub text: String,
}

impl JsonParseError {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message: "failed to parse json text".to_string(),
            cause: None,
            text: text.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// A decoded value did not match its expected schema. Tag `TypeValidationError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TypeValidationError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub value: Value,
}

impl TypeValidationError {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            message: "type validation failed".to_string(),
            cause: None,
            value: value.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}
