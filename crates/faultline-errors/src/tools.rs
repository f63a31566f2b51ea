//! Tool resolution and tool call repair failures.

use crate::base::ErrorCause;
use crate::error::SDKError;

/// The model produced input a tool could not accept. Tag `InvalidToolInputError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidToolInputError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub tool_name: String,
    /// Raw input text as produced by the model, before any parsing.
    pub tool_input: String,
}

impl InvalidToolInputError {
    pub fn new(tool_name: impl Into<String>, tool_input: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        Self {
            message: format!("invalid input for tool {tool_name}"),
            cause: None,
            tool_name,
            tool_input: tool_input.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// The model called a tool that is not registered. Tag `NoSuchToolError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NoSuchToolError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub tool_name: String,
    pub available_tools: Option<Vec<String>>,
}

impl NoSuchToolError {
    pub fn new(tool_name: impl Into<String>, available_tools: Option<Vec<String>>) -> Self {
        let tool_name = tool_name.into();
        let message = match &available_tools {
            Some(tools) => format!(
                "model tried to call unavailable tool '{tool_name}', available tools: {}",
                tools.join(", ")
            ),
            None => format!("model tried to call unavailable tool '{tool_name}'"),
        };
        Self {
            message,
            cause: None,
            tool_name,
            available_tools,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Repairing a failed tool call itself failed. Tag `ToolCallRepairError`.
///
/// `original_error` is the failure that triggered the repair attempt and is
/// carried across the wire recursively, exactly like a cause.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ToolCallRepairError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub original_error: Box<SDKError>,
}

impl ToolCallRepairError {
    pub fn new(original_error: impl Into<SDKError>, cause: ErrorCause) -> Self {
        let reason = match &cause {
            ErrorCause::Error(error) => error.message().to_string(),
            ErrorCause::Value(value) => value.to_string(),
        };
        Self {
            message: format!("failed to repair tool call: {reason}"),
            cause: Some(Box::new(cause)),
            original_error: Box::new(original_error.into()),
        }
    }
}
