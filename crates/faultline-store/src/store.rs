use crate::types::{AppendFailureRequest, FailureId, StoredFailure, SubjectId};

#[derive(Debug, thiserror::Error)]
pub enum FailureStoreError {
    #[error("resource not found: {resource} ({id})")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

pub type FailureStoreResult<T> = Result<T, FailureStoreError>;

/// Durable storage for captured failures.
///
/// A subject is the chat or job record a failure is filed against. Appends
/// within one subject are ordered by a monotonically increasing sequence
/// number, and an idempotency key makes repeated captures of the same
/// failure collapse into one record.
#[async_trait::async_trait]
pub trait FailureStore: Send + Sync {
    async fn append_failure(
        &self,
        request: AppendFailureRequest,
    ) -> FailureStoreResult<StoredFailure>;

    async fn get_failure(&self, failure_id: &FailureId) -> FailureStoreResult<StoredFailure>;

    /// The most recent `limit` failures for a subject, oldest first.
    async fn list_failures(
        &self,
        subject_id: &SubjectId,
        limit: usize,
    ) -> FailureStoreResult<Vec<StoredFailure>>;

    async fn latest_failure(
        &self,
        subject_id: &SubjectId,
    ) -> FailureStoreResult<Option<StoredFailure>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_store_error_not_found_expected_metadata() {
        let error = FailureStoreError::NotFound {
            resource: "failure",
            id: "f-1".to_string(),
        };

        assert!(matches!(
            error,
            FailureStoreError::NotFound {
                resource: "failure",
                ..
            }
        ));
        assert_eq!(error.to_string(), "resource not found: failure (f-1)");
    }
}
