//! Closed error taxonomy for the agent platform's SDK surface.
//!
//! Every failure category the platform persists, retries, or surfaces to
//! users is one of the kinds defined here. The wire representation lives in
//! `faultline-wire`; this crate only defines the types, their conventional
//! messages, and retryability classification.

pub mod base;
pub mod error;
pub mod generation;
pub mod network;
pub mod tools;
pub mod validation;

pub use base::{ErrorCause, GenericError, NamedError};
pub use error::SDKError;
pub use generation::{
    MessageConversionError, ModelType, NoContentGeneratedError, NoImageGeneratedError,
    NoObjectGeneratedError, NoSuchModelError, ResponseMetadata, TokenUsage,
    UnsupportedFunctionalityError,
};
pub use network::{ApiCallError, DownloadError, RetryError, RetryReason};
pub use tools::{InvalidToolInputError, NoSuchToolError, ToolCallRepairError};
pub use validation::{
    InvalidArgumentError, InvalidDataContentError, InvalidMessageRoleError, InvalidPromptError,
    InvalidResponseDataError, InvalidStreamPartError, JsonParseError, TypeValidationError,
};
