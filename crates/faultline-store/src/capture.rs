//! Bridging helpers between the wire codecs and the store.

use faultline_errors::SDKError;
use faultline_wire::{deserialize_error, serialize_error};

use crate::store::{FailureStore, FailureStoreError, FailureStoreResult};
use crate::types::{AppendFailureRequest, FailureId, StoredFailure};

/// Serializes an error and files it against a subject.
pub async fn capture_error<S: FailureStore + ?Sized>(
    store: &S,
    subject_id: &str,
    source: &str,
    error: &SDKError,
) -> FailureStoreResult<StoredFailure> {
    store
        .append_failure(AppendFailureRequest {
            subject_id: subject_id.to_string(),
            source: source.to_string(),
            payload: serialize_error(error),
            idempotency_key: String::new(),
        })
        .await
}

/// Loads a stored failure and reconstructs the error it captured.
pub async fn recall_error<S: FailureStore + ?Sized>(
    store: &S,
    failure_id: &FailureId,
) -> FailureStoreResult<SDKError> {
    let stored = store.get_failure(failure_id).await?;
    deserialize_error(&stored.payload)
        .map_err(|err| FailureStoreError::Serialization(err.to_string()))
}
