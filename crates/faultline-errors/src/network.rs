//! Upstream call, download, and retry-exhaustion failures.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::base::ErrorCause;
use crate::error::SDKError;

/// An HTTP call against a provider API failed. Tag `APICallError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiCallError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub url: String,
    pub request_body_values: Option<Value>,
    pub status_code: Option<u16>,
    pub response_headers: Option<BTreeMap<String, String>>,
    pub response_body: Option<String>,
    pub is_retryable: bool,
    /// Provider-specific structured error payload.
    pub data: Option<Value>,
}

impl ApiCallError {
    pub fn new(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
            url: url.into(),
            request_body_values: None,
            status_code: None,
            response_headers: None,
            response_body: None,
            is_retryable: false,
            data: None,
        }
    }

    /// Records the response status and re-derives the retryable flag from it.
    /// Call [`ApiCallError::retryable`] afterwards to override.
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self.is_retryable = default_is_retryable(status_code);
        self
    }

    pub fn retryable(mut self, is_retryable: bool) -> Self {
        self.is_retryable = is_retryable;
        self
    }

    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Timeouts, lock contention, rate limits, and server-side failures are worth
/// retrying; everything else is not.
fn default_is_retryable(status_code: u16) -> bool {
    matches!(status_code, 408 | 409 | 429) || status_code >= 500
}

/// Fetching a remote resource (attachment, image) failed. Tag `DownloadError`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct DownloadError {
    pub message: String,
    pub cause: Option<Box<ErrorCause>>,
    pub url: String,
    pub status_code: Option<u16>,
    pub status_text: Option<String>,
}

impl DownloadError {
    pub fn new(
        url: impl Into<String>,
        status_code: Option<u16>,
        status_text: Option<String>,
    ) -> Self {
        let url = url.into();
        let message = match (status_code, &status_text) {
            (Some(code), Some(text)) => format!("failed to download {url}: {code} {text}"),
            (Some(code), None) => format!("failed to download {url}: {code}"),
            _ => format!("failed to download {url}"),
        };
        Self {
            message,
            cause: None,
            url,
            status_code,
            status_text,
        }
    }

    pub fn caused_by(mut self, cause: ErrorCause) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Why a retry loop gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryReason {
    MaxRetriesExceeded,
    ErrorNotRetryable,
    Abort,
}

impl RetryReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryReason::MaxRetriesExceeded => "maxRetriesExceeded",
            RetryReason::ErrorNotRetryable => "errorNotRetryable",
            RetryReason::Abort => "abort",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "maxRetriesExceeded" => Some(RetryReason::MaxRetriesExceeded),
            "errorNotRetryable" => Some(RetryReason::ErrorNotRetryable),
            "abort" => Some(RetryReason::Abort),
            _ => None,
        }
    }
}

/// A retry loop exhausted its attempts. Tag `RetryError`.
///
/// Accumulates every per-attempt failure in order; the last entry is the one
/// that ended the loop.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RetryError {
    pub message: String,
    pub reason: RetryReason,
    pub errors: Vec<SDKError>,
}

impl RetryError {
    pub fn new(message: impl Into<String>, reason: RetryReason, errors: Vec<SDKError>) -> Self {
        Self {
            message: message.into(),
            reason,
            errors,
        }
    }

    pub fn last_error(&self) -> Option<&SDKError> {
        self.errors.last()
    }
}
