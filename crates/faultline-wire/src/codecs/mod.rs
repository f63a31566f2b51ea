//! Per-kind codecs.
//!
//! Codecs form a delegation chain mirroring the kind hierarchy: the generic
//! codec handles message and cause, the named codec overlays the SDK subtype
//! name, and every leaf codec calls through them before adding its own
//! fields.

pub(crate) mod generation;
pub(crate) mod network;
pub(crate) mod tools;
pub(crate) mod validation;

use faultline_errors::{ErrorCause, GenericError, NamedError, SDKError};
use serde_json::Value;

use crate::record::{CLASS_NAME, FlatRecord};
use crate::registry;

/// Base case: any error with a message and optional cause. Also the fallback
/// for unknown tags in both directions.
pub(crate) fn encode_generic(error: &SDKError) -> FlatRecord {
    let mut record = FlatRecord::new("Error");
    record.set_str("message", error.message());
    if let Some(cause) = error.cause() {
        record.set("cause", encode_cause(cause));
    }
    record
}

pub(crate) fn decode_generic(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::Generic(GenericError { message, cause })
}

/// Overlays the named SDK shape on the generic encoding.
pub(crate) fn encode_named(error: &SDKError) -> FlatRecord {
    let mut record = encode_generic(error);
    record.set_str(CLASS_NAME, "AISDKError");
    let name = match error {
        SDKError::Named(e) => e.name.as_str(),
        _ => error.tag(),
    };
    record.set_str("name", name);
    record
}

pub(crate) fn decode_named(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::Named(NamedError {
        name: record
            .string_field("name")
            .unwrap_or_else(|| "AISDKError".to_string()),
        message,
        cause,
    })
}

/// Shared parent decoding: specialized codecs read message and cause through
/// here instead of reimplementing them.
pub(crate) fn decode_base(record: &FlatRecord) -> (String, Option<Box<ErrorCause>>) {
    let message = record.string_field("message").unwrap_or_default();
    let cause = record
        .field("cause")
        .map(|value| Box::new(decode_cause(value)));
    (message, cause)
}

/// A cause that is itself a taxonomy error re-enters the registry; anything
/// else crosses the wire untouched.
pub(crate) fn encode_cause(cause: &ErrorCause) -> Value {
    match cause {
        ErrorCause::Error(error) => registry::encode_error(error).into_value(),
        ErrorCause::Value(value) => value.clone(),
    }
}

/// An object carrying `className` is a tagged error; everything else stays a
/// raw value.
pub(crate) fn decode_cause(value: &Value) -> ErrorCause {
    if let Some(record) = FlatRecord::from_value(value.clone()) {
        if record.class_name().is_some() {
            return ErrorCause::Error(registry::decode_record(&record));
        }
    }
    ErrorCause::Value(value.clone())
}

/// Decodes a field that must hold a tagged error (`originalError`). A missing
/// or non-object field bottoms out at an empty generic error.
pub(crate) fn decode_error_field(value: Option<&Value>) -> SDKError {
    match value.cloned().and_then(FlatRecord::from_value) {
        Some(record) => registry::decode_record(&record),
        None => SDKError::Generic(GenericError::new("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_cause_object_without_class_name_expected_raw_value() {
        let value = json!({"detail": "not an error record"});
        assert_eq!(decode_cause(&value), ErrorCause::Value(value));
    }

    #[test]
    fn decode_cause_tagged_object_expected_taxonomy_error() {
        let value = json!({"className": "Error", "message": "boom"});
        let cause = decode_cause(&value);
        assert_eq!(
            cause,
            ErrorCause::Error(SDKError::Generic(GenericError::new("boom")))
        );
    }

    #[test]
    fn encode_named_keeps_subtype_name() {
        let error = SDKError::Named(NamedError::new("QuotaExceededError", "quota exhausted"));
        let record = encode_named(&error);
        assert_eq!(record.class_name(), Some("AISDKError"));
        assert_eq!(record.str_field("name"), Some("QuotaExceededError"));
        assert_eq!(record.str_field("message"), Some("quota exhausted"));
    }
}
