//! Durable storage for captured failures.
//!
//! Errors serialized by `faultline-wire` are filed against subjects (chat or
//! job records) and can be listed or reconstructed later with full kind
//! fidelity.

pub mod capture;
pub mod fs;
pub mod memory;
pub mod store;
pub mod types;

pub use capture::{capture_error, recall_error};
pub use fs::FsFailureStore;
pub use memory::MemoryFailureStore;
pub use store::{FailureStore, FailureStoreError, FailureStoreResult};
pub use types::{AppendFailureRequest, FailureId, StoredFailure, SubjectId};
