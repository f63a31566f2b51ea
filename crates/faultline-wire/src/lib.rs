//! Wire format for the error taxonomy.
//!
//! Converts any [`SDKError`] into an opaque JSON string that survives a
//! database text column, a queue message, or a log line, and reconstructs
//! the specific kind on the way back. Nested causes (and
//! `ToolCallRepairError::original_error`) round-trip recursively to
//! arbitrary depth.
//!
//! Decoding is deliberately lenient about kinds: a payload whose
//! `className` has no registered codec still decodes, as a generic error
//! with the message preserved. Only structurally broken payloads (non-JSON,
//! non-object) are reported as [`WireError`].

pub mod record;

mod codecs;
mod registry;

use faultline_errors::SDKError;

pub use record::FlatRecord;

/// Decoding failure for a serialized error payload.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed error payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("error payload is not a json object")]
    NotARecord,
}

/// Encodes an error into its opaque string form.
///
/// The kind's codec is looked up by the error's explicit tag; kinds without
/// a dedicated codec degrade to the generic message-and-cause shape.
pub fn serialize_error(error: &SDKError) -> String {
    registry::encode_error(error).into_json()
}

/// Decodes a string produced by [`serialize_error`] back into the specific
/// error kind.
///
/// An unknown `className` falls back to the generic codec and never fails;
/// the mangled class names a minifying web tier can produce are normalized
/// before lookup.
pub fn deserialize_error(payload: &str) -> Result<SDKError, WireError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let record = FlatRecord::from_value(value).ok_or(WireError::NotARecord)?;
    Ok(registry::decode_record(&record))
}
