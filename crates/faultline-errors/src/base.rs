use serde_json::Value;

use crate::error::SDKError;

/// The lower-level failure an error wraps.
///
/// A `cause` is either another taxonomy error, which round-trips through the
/// wire registry recursively, or an arbitrary JSON value carried through
/// as-is.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorCause {
    Error(SDKError),
    Value(Value),
}

impl ErrorCause {
    pub fn error(error: impl Into<SDKError>) -> Self {
        ErrorCause::Error(error.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        ErrorCause::Value(value.into())
    }

    /// The wrapped taxonomy error, if the cause is one.
    pub fn as_error(&self) -> Option<&SDKError> {
        match self {
            ErrorCause::Error(error) => Some(error),
            ErrorCause::Value(_) => None,
        }
    }
}

/// Any plain error with a message and optional cause. Tag `Error`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct GenericError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
}

impl GenericError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// An SDK-shaped error whose concrete kind has no dedicated variant.
///
/// Keeps the subtype name so the wire format can preserve it under the
/// `AISDKError` tag. Tag `AISDKError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NamedError {
    pub name: String,
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
}

impl NamedError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}
