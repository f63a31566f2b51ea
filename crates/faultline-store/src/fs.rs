use std::fs;
use std::path::{Path, PathBuf};

use crate::memory::{MemoryFailureStore, MemoryState};
use crate::store::{FailureStore, FailureStoreError, FailureStoreResult};
use crate::types::{AppendFailureRequest, FailureId, StoredFailure, SubjectId};

const STATE_FILE_NAME: &str = "failure-store-state.json";

/// Filesystem-backed store: the in-memory state, persisted to a JSON state
/// file after every append and restored on reopen.
#[derive(Clone, Debug)]
pub struct FsFailureStore {
    state_file: PathBuf,
    inner: MemoryFailureStore,
}

impl FsFailureStore {
    pub fn new<P: AsRef<Path>>(root: P) -> FailureStoreResult<Self> {
        fs::create_dir_all(root.as_ref()).map_err(|err| {
            FailureStoreError::Backend(format!("create fs store root failed: {err}"))
        })?;
        let state_file = root.as_ref().join(STATE_FILE_NAME);
        let state = if state_file.exists() {
            let raw = fs::read(&state_file).map_err(|err| {
                FailureStoreError::Backend(format!("read state file failed: {err}"))
            })?;
            serde_json::from_slice::<MemoryState>(&raw)
                .map_err(|err| FailureStoreError::Serialization(err.to_string()))?
        } else {
            MemoryState::default()
        };

        Ok(Self {
            state_file,
            inner: MemoryFailureStore::from_state(state),
        })
    }

    fn persist(&self) -> FailureStoreResult<()> {
        let snapshot = self.inner.snapshot();
        let raw = serde_json::to_vec_pretty(&snapshot)
            .map_err(|err| FailureStoreError::Serialization(err.to_string()))?;
        let tmp = self.state_file.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .map_err(|err| FailureStoreError::Backend(format!("write state file failed: {err}")))?;
        fs::rename(&tmp, &self.state_file).map_err(|err| {
            FailureStoreError::Backend(format!("rename state file failed: {err}"))
        })?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FailureStore for FsFailureStore {
    async fn append_failure(
        &self,
        request: AppendFailureRequest,
    ) -> FailureStoreResult<StoredFailure> {
        let failure = self.inner.append_failure(request).await?;
        self.persist()?;
        Ok(failure)
    }

    async fn get_failure(&self, failure_id: &FailureId) -> FailureStoreResult<StoredFailure> {
        self.inner.get_failure(failure_id).await
    }

    async fn list_failures(
        &self,
        subject_id: &SubjectId,
        limit: usize,
    ) -> FailureStoreResult<Vec<StoredFailure>> {
        self.inner.list_failures(subject_id, limit).await
    }

    async fn latest_failure(
        &self,
        subject_id: &SubjectId,
    ) -> FailureStoreResult<Option<StoredFailure>> {
        self.inner.latest_failure(subject_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "current_thread")]
    async fn fs_store_reopen_restores_previous_failures() {
        let tmp = tempfile::tempdir().expect("tempdir should be created");
        let store = FsFailureStore::new(tmp.path()).expect("fs store should initialize");

        let appended = store
            .append_failure(AppendFailureRequest {
                subject_id: "chat-1".to_string(),
                source: "chat".to_string(),
                payload: "{\"className\":\"Error\",\"message\":\"boom\"}".to_string(),
                idempotency_key: "k1".to_string(),
            })
            .await
            .expect("append should succeed");
        drop(store);

        let reopened = FsFailureStore::new(tmp.path()).expect("fs store should reopen");
        let latest = reopened
            .latest_failure(&"chat-1".to_string())
            .await
            .expect("latest lookup should succeed");
        assert_eq!(latest, Some(appended));
    }
}
