use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::store::{FailureStore, FailureStoreError, FailureStoreResult};
use crate::types::{AppendFailureRequest, FailureId, StoredFailure, SubjectId};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct MemoryState {
    pub failures: BTreeMap<FailureId, StoredFailure>,
    /// Per-subject append order; index position is `seq - 1`.
    pub subjects: BTreeMap<SubjectId, Vec<FailureId>>,
    pub idempotency: BTreeMap<String, FailureId>,
}

impl MemoryState {
    fn content_hash(payload: &str) -> String {
        blake3::hash(payload.as_bytes()).to_hex().to_string()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryFailureStore {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryFailureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: MemoryState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub(crate) fn snapshot(&self) -> MemoryState {
        self.inner
            .lock()
            .expect("memory failure store mutex poisoned")
            .clone()
    }
}

#[async_trait::async_trait]
impl FailureStore for MemoryFailureStore {
    async fn append_failure(
        &self,
        request: AppendFailureRequest,
    ) -> FailureStoreResult<StoredFailure> {
        if request.subject_id.is_empty() {
            return Err(FailureStoreError::InvalidInput(
                "subject_id must not be empty".to_string(),
            ));
        }
        if request.payload.is_empty() {
            return Err(FailureStoreError::InvalidInput(
                "payload must not be empty".to_string(),
            ));
        }

        let mut state = self.inner.lock().map_err(|_| {
            FailureStoreError::Backend("memory failure store mutex poisoned".to_string())
        })?;

        let key = if request.idempotency_key.is_empty() {
            None
        } else {
            Some(format!("{}|{}", request.subject_id, request.idempotency_key))
        };

        if let Some(existing_key) = &key {
            if let Some(failure_id) = state.idempotency.get(existing_key) {
                if let Some(failure) = state.failures.get(failure_id) {
                    return Ok(failure.clone());
                }
            }
        }

        let subject = state.subjects.entry(request.subject_id.clone()).or_default();
        let seq = subject.len() as u64 + 1;
        let failure_id = uuid::Uuid::new_v4().to_string();
        subject.push(failure_id.clone());

        let failure = StoredFailure {
            failure_id: failure_id.clone(),
            subject_id: request.subject_id,
            seq,
            source: request.source,
            content_hash: MemoryState::content_hash(&request.payload),
            payload: request.payload,
            idempotency_key: key.as_ref().map(|_| request.idempotency_key),
        };

        state.failures.insert(failure_id.clone(), failure.clone());
        if let Some(existing_key) = key {
            state.idempotency.insert(existing_key, failure_id);
        }

        Ok(failure)
    }

    async fn get_failure(&self, failure_id: &FailureId) -> FailureStoreResult<StoredFailure> {
        let state = self.inner.lock().map_err(|_| {
            FailureStoreError::Backend("memory failure store mutex poisoned".to_string())
        })?;
        state
            .failures
            .get(failure_id)
            .cloned()
            .ok_or_else(|| FailureStoreError::NotFound {
                resource: "failure",
                id: failure_id.clone(),
            })
    }

    async fn list_failures(
        &self,
        subject_id: &SubjectId,
        limit: usize,
    ) -> FailureStoreResult<Vec<StoredFailure>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let state = self.inner.lock().map_err(|_| {
            FailureStoreError::Backend("memory failure store mutex poisoned".to_string())
        })?;
        let subject = state
            .subjects
            .get(subject_id)
            .ok_or_else(|| FailureStoreError::NotFound {
                resource: "subject",
                id: subject_id.clone(),
            })?;

        let skip = subject.len().saturating_sub(limit);
        subject
            .iter()
            .skip(skip)
            .map(|failure_id| {
                state.failures.get(failure_id).cloned().ok_or_else(|| {
                    FailureStoreError::Backend(format!("dangling failure id {failure_id}"))
                })
            })
            .collect()
    }

    async fn latest_failure(
        &self,
        subject_id: &SubjectId,
    ) -> FailureStoreResult<Option<StoredFailure>> {
        let state = self.inner.lock().map_err(|_| {
            FailureStoreError::Backend("memory failure store mutex poisoned".to_string())
        })?;
        let Some(subject) = state.subjects.get(subject_id) else {
            return Ok(None);
        };
        Ok(subject
            .last()
            .and_then(|failure_id| state.failures.get(failure_id))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(subject: &str, payload: &str, key: &str) -> AppendFailureRequest {
        AppendFailureRequest {
            subject_id: subject.to_string(),
            source: "chat".to_string(),
            payload: payload.to_string(),
            idempotency_key: key.to_string(),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn append_failure_with_same_idempotency_key_expected_single_record() {
        let store = MemoryFailureStore::new();

        let first = store
            .append_failure(request("chat-1", "{\"className\":\"Error\"}", "k1"))
            .await
            .expect("append should succeed");
        let second = store
            .append_failure(request("chat-1", "{\"className\":\"Error\"}", "k1"))
            .await
            .expect("idempotent append should succeed");

        assert_eq!(first.failure_id, second.failure_id);
        let listed = store
            .list_failures(&"chat-1".to_string(), 10)
            .await
            .expect("list should succeed");
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn append_failure_seq_increments_per_subject() {
        let store = MemoryFailureStore::new();

        let a1 = store
            .append_failure(request("chat-a", "{}1", ""))
            .await
            .expect("append should succeed");
        let a2 = store
            .append_failure(request("chat-a", "{}2", ""))
            .await
            .expect("append should succeed");
        let b1 = store
            .append_failure(request("chat-b", "{}3", ""))
            .await
            .expect("append should succeed");

        assert_eq!((a1.seq, a2.seq, b1.seq), (1, 2, 1));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn append_failure_empty_subject_expected_invalid_input() {
        let store = MemoryFailureStore::new();
        let result = store.append_failure(request("", "{}", "")).await;
        assert!(matches!(result, Err(FailureStoreError::InvalidInput(_))));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn list_failures_limit_expected_most_recent_in_order() {
        let store = MemoryFailureStore::new();
        for n in 1..=5 {
            store
                .append_failure(request("chat-1", &format!("{{\"n\":{n}}}"), ""))
                .await
                .expect("append should succeed");
        }

        let listed = store
            .list_failures(&"chat-1".to_string(), 2)
            .await
            .expect("list should succeed");
        assert_eq!(listed.len(), 2);
        assert_eq!((listed[0].seq, listed[1].seq), (4, 5));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn latest_failure_unknown_subject_expected_none() {
        let store = MemoryFailureStore::new();
        let latest = store
            .latest_failure(&"nope".to_string())
            .await
            .expect("latest should succeed");
        assert_eq!(latest, None);
    }
}
