use crate::base::{ErrorCause, GenericError, NamedError};
use crate::generation::{
    MessageConversionError, NoContentGeneratedError, NoImageGeneratedError, NoObjectGeneratedError,
    NoSuchModelError, UnsupportedFunctionalityError,
};
use crate::network::{ApiCallError, DownloadError, RetryError};
use crate::tools::{InvalidToolInputError, NoSuchToolError, ToolCallRepairError};
use crate::validation::{
    InvalidArgumentError, InvalidDataContentError, InvalidMessageRoleError, InvalidPromptError,
    InvalidResponseDataError, InvalidStreamPartError, JsonParseError, TypeValidationError,
};

/// The closed error taxonomy of the SDK surface.
///
/// Every variant states its wire tag explicitly through [`SDKError::tag`];
/// producers pick the kind at construction time, never by inspecting a
/// runtime type name.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SDKError {
    #[error(transparent)]
    Generic(#[from] GenericError),
    #[error(transparent)]
    Named(#[from] NamedError),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    #[error(transparent)]
    InvalidPrompt(#[from] InvalidPromptError),
    #[error(transparent)]
    InvalidMessageRole(#[from] InvalidMessageRoleError),
    #[error(transparent)]
    InvalidDataContent(#[from] InvalidDataContentError),
    #[error(transparent)]
    InvalidResponseData(#[from] InvalidResponseDataError),
    #[error(transparent)]
    InvalidStreamPart(#[from] InvalidStreamPartError),
    #[error(transparent)]
    InvalidToolInput(#[from] InvalidToolInputError),
    #[error(transparent)]
    JsonParse(#[from] JsonParseError),
    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),
    #[error(transparent)]
    ApiCall(#[from] ApiCallError),
    #[error(transparent)]
    Download(#[from] DownloadError),
    #[error(transparent)]
    Retry(#[from] RetryError),
    #[error(transparent)]
    NoSuchTool(#[from] NoSuchToolError),
    #[error(transparent)]
    NoSuchModel(#[from] NoSuchModelError),
    #[error(transparent)]
    NoContentGenerated(#[from] NoContentGeneratedError),
    #[error(transparent)]
    NoObjectGenerated(#[from] NoObjectGeneratedError),
    #[error(transparent)]
    NoImageGenerated(#[from] NoImageGeneratedError),
    #[error(transparent)]
    MessageConversion(#[from] MessageConversionError),
    #[error(transparent)]
    ToolCallRepair(#[from] ToolCallRepairError),
    #[error(transparent)]
    UnsupportedFunctionality(#[from] UnsupportedFunctionalityError),
}

impl SDKError {
    /// The wire tag (`className`) this kind serializes under.
    ///
    /// Tags are the class names of the platform's web tier so serialized
    /// payloads stay interoperable with it.
    pub fn tag(&self) -> &'static str {
        match self {
            SDKError::Generic(_) => "Error",
            SDKError::Named(_) => "AISDKError",
            SDKError::InvalidArgument(_) => "InvalidArgumentError",
            SDKError::InvalidPrompt(_) => "InvalidPromptError",
            SDKError::InvalidMessageRole(_) => "InvalidMessageRoleError",
            SDKError::InvalidDataContent(_) => "InvalidDataContentError",
            SDKError::InvalidResponseData(_) => "InvalidResponseDataError",
            SDKError::InvalidStreamPart(_) => "InvalidStreamPartError",
            SDKError::InvalidToolInput(_) => "InvalidToolInputError",
            SDKError::JsonParse(_) => "JSONParseError",
            SDKError::TypeValidation(_) => "TypeValidationError",
            SDKError::ApiCall(_) => "APICallError",
            SDKError::Download(_) => "DownloadError",
            SDKError::Retry(_) => "RetryError",
            SDKError::NoSuchTool(_) => "NoSuchToolError",
            SDKError::NoSuchModel(_) => "NoSuchModelError",
            SDKError::NoContentGenerated(_) => "NoContentGeneratedError",
            SDKError::NoObjectGenerated(_) => "NoObjectGeneratedError",
            SDKError::NoImageGenerated(_) => "NoImageGeneratedError",
            SDKError::MessageConversion(_) => "MessageConversionError",
            SDKError::ToolCallRepair(_) => "ToolCallRepairError",
            SDKError::UnsupportedFunctionality(_) => "UnsupportedFunctionalityError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SDKError::Generic(e) => &e.message,
            SDKError::Named(e) => &e.message,
            SDKError::InvalidArgument(e) => &e.message,
            SDKError::InvalidPrompt(e) => &e.message,
            SDKError::InvalidMessageRole(e) => &e.message,
            SDKError::InvalidDataContent(e) => &e.message,
            SDKError::InvalidResponseData(e) => &e.message,
            SDKError::InvalidStreamPart(e) => &e.message,
            SDKError::InvalidToolInput(e) => &e.message,
            SDKError::JsonParse(e) => &e.message,
            SDKError::TypeValidation(e) => &e.message,
            SDKError::ApiCall(e) => &e.message,
            SDKError::Download(e) => &e.message,
            SDKError::Retry(e) => &e.message,
            SDKError::NoSuchTool(e) => &e.message,
            SDKError::NoSuchModel(e) => &e.message,
            SDKError::NoContentGenerated(e) => &e.message,
            SDKError::NoObjectGenerated(e) => &e.message,
            SDKError::NoImageGenerated(e) => &e.message,
            SDKError::MessageConversion(e) => &e.message,
            SDKError::ToolCallRepair(e) => &e.message,
            SDKError::UnsupportedFunctionality(e) => &e.message,
        }
    }

    /// The wrapped lower-level failure, when the kind carries one.
    pub fn cause(&self) -> Option<&ErrorCause> {
        match self {
            SDKError::Generic(e) => e.cause.as_deref(),
            SDKError::Named(e) => e.cause.as_deref(),
            SDKError::InvalidArgument(e) => e.cause.as_deref(),
            SDKError::InvalidPrompt(e) => e.cause.as_deref(),
            SDKError::InvalidMessageRole(e) => e.cause.as_deref(),
            SDKError::InvalidDataContent(e) => e.cause.as_deref(),
            SDKError::InvalidResponseData(e) => e.cause.as_deref(),
            SDKError::InvalidStreamPart(e) => e.cause.as_deref(),
            SDKError::InvalidToolInput(e) => e.cause.as_deref(),
            SDKError::JsonParse(e) => e.cause.as_deref(),
            SDKError::TypeValidation(e) => e.cause.as_deref(),
            SDKError::ApiCall(e) => e.cause.as_deref(),
            SDKError::Download(e) => e.cause.as_deref(),
            SDKError::Retry(_) => None,
            SDKError::NoSuchTool(e) => e.cause.as_deref(),
            SDKError::NoSuchModel(e) => e.cause.as_deref(),
            SDKError::NoContentGenerated(e) => e.cause.as_deref(),
            SDKError::NoObjectGenerated(e) => e.cause.as_deref(),
            SDKError::NoImageGenerated(e) => e.cause.as_deref(),
            SDKError::MessageConversion(e) => e.cause.as_deref(),
            SDKError::ToolCallRepair(e) => e.cause.as_deref(),
            SDKError::UnsupportedFunctionality(e) => e.cause.as_deref(),
        }
    }

    /// Whether a retry loop should attempt the failed operation again.
    ///
    /// Only upstream API calls carry a retryable signal; every other kind is
    /// a deterministic failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            SDKError::ApiCall(e) => e.is_retryable,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_web_tier_class_names() {
        let error: SDKError = NoSuchToolError::new("search", None).into();
        assert_eq!(error.tag(), "NoSuchToolError");

        let error: SDKError = JsonParseError::new("{").into();
        assert_eq!(error.tag(), "JSONParseError");

        let error: SDKError = GenericError::new("boom").into();
        assert_eq!(error.tag(), "Error");
    }

    #[test]
    fn is_retryable_only_for_retryable_api_calls() {
        let retryable: SDKError = ApiCallError::new("boom", "https://api.example.com")
            .with_status(503)
            .into();
        assert!(retryable.is_retryable());

        let terminal: SDKError = ApiCallError::new("boom", "https://api.example.com")
            .with_status(401)
            .into();
        assert!(!terminal.is_retryable());

        let other: SDKError = NoContentGeneratedError::new().into();
        assert!(!other.is_retryable());
    }

    #[test]
    fn display_forwards_to_kind_message() {
        let error: SDKError = DownloadError::new("https://cdn.example.com/a.png", None, None).into();
        assert_eq!(error.to_string(), "failed to download https://cdn.example.com/a.png");
        assert_eq!(error.message(), error.to_string());
    }
}
