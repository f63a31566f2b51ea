use serde::{Deserialize, Serialize};

pub type SubjectId = String;
pub type FailureId = String;

/// Request to file a failure against a subject (chat or job record).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendFailureRequest {
    pub subject_id: SubjectId,
    /// Subsystem that captured the failure (e.g. "chat", "retry", "tool").
    pub source: String,
    /// Opaque serialized error payload as produced by `faultline-wire`.
    pub payload: String,
    /// Empty disables idempotent deduplication.
    pub idempotency_key: String,
}

/// A failure as persisted. `seq` orders failures within one subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFailure {
    pub failure_id: FailureId,
    pub subject_id: SubjectId,
    pub seq: u64,
    pub source: String,
    pub payload: String,
    pub content_hash: String,
    pub idempotency_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_failure_round_trip_expected_lossless() {
        let failure = StoredFailure {
            failure_id: "f-1".to_string(),
            subject_id: "chat-42".to_string(),
            seq: 3,
            source: "retry".to_string(),
            payload: "{\"className\":\"Error\",\"message\":\"boom\"}".to_string(),
            content_hash: "abc123".to_string(),
            idempotency_key: Some("attempt-3".to_string()),
        };

        let encoded = serde_json::to_vec(&failure).expect("failure should serialize");
        let decoded: StoredFailure =
            serde_json::from_slice(&encoded).expect("failure should deserialize");

        assert_eq!(decoded, failure);
    }
}
