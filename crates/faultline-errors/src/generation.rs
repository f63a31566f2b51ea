//! Model resolution and generation-outcome failures.

use serde_json::Value;

use crate::base::ErrorCause;

/// Response envelope a generation attempt came back with.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseMetadata {
    pub id: String,
    pub model_id: String,
    /// RFC 3339 timestamp of the provider response.
    pub timestamp: String,
}

/// Token accounting for a generation attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// Which model surface an identifier was resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelType {
    LanguageModel,
    TextEmbeddingModel,
    ImageModel,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::LanguageModel => "languageModel",
            ModelType::TextEmbeddingModel => "textEmbeddingModel",
            ModelType::ImageModel => "imageModel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "languageModel" => Some(ModelType::LanguageModel),
            "textEmbeddingModel" => Some(ModelType::TextEmbeddingModel),
            "imageModel" => Some(ModelType::ImageModel),
            _ => None,
        }
    }
}

/// A model identifier did not resolve. Tag `NoSuchModelError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NoSuchModelError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub model_id: String,
    pub model_type: ModelType,
}

impl NoSuchModelError {
    pub fn new(model_id: impl Into<String>, model_type: ModelType) -> Self {
        let model_id = model_id.into();
        Self {
            message: format!("no such model: {model_id}"),
            cause: None,
            model_id,
            model_type,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// The model finished without producing any content. Tag `NoContentGeneratedError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NoContentGeneratedError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
}

impl NoContentGeneratedError {
    pub fn new() -> Self {
        Self {
            message: "no content generated".to_string(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl Default for NoContentGeneratedError {
    fn default() -> Self {
        Self::new()
    }
}

/// A structured-output call did not yield a parsable object.
/// Tag `NoObjectGeneratedError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NoObjectGeneratedError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    /// Raw text the model produced instead of a valid object.
    pub text: Option<String>,
    pub response: Option<ResponseMetadata>,
    pub usage: Option<TokenUsage>,
    pub finish_reason: Option<String>,
}

impl NoObjectGeneratedError {
    pub fn new() -> Self {
        Self {
            message: "no object generated".to_string(),
            cause: None,
            text: None,
            response: None,
            usage: None,
            finish_reason: None,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl Default for NoObjectGeneratedError {
    fn default() -> Self {
        Self::new()
    }
}

/// An image call finished without an image. Tag `NoImageGeneratedError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct NoImageGeneratedError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub responses: Option<Vec<ResponseMetadata>>,
}

impl NoImageGeneratedError {
    pub fn new(responses: Option<Vec<ResponseMetadata>>) -> Self {
        Self {
            message: "no image generated".to_string(),
            cause: None,
            responses,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// A platform message could not be converted into a model message.
/// Tag `MessageConversionError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct MessageConversionError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub original_message: Value,
}

impl MessageConversionError {
    pub fn new(original_message: impl Into<Value>, reason: &str) -> Self {
        Self {
            message: format!("failed to convert message: {reason}"),
            cause: None,
            original_message: original_message.into(),
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// A provider was asked for something it cannot do.
/// Tag `UnsupportedFunctionalityError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct UnsupportedFunctionalityError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub functionality: String,
}

impl UnsupportedFunctionalityError {
    pub fn new(functionality: impl Into<String>) -> Self {
        let functionality = functionality.into();
        Self {
            message: format!("functionality not supported: {functionality}"),
            cause: None,
            functionality,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}
