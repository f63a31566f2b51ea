//! Codecs for the upstream call and retry failure kinds.

use faultline_errors::{ApiCallError, DownloadError, RetryError, RetryReason, SDKError};
use serde_json::{Map, Value};

use super::{decode_base, encode_generic, encode_named};
use crate::record::{CLASS_NAME, FlatRecord};
use crate::registry;

pub(crate) fn encode_api_call(error: &SDKError) -> FlatRecord {
    let SDKError::ApiCall(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "APICallError");
    record.set_str("url", &e.url);
    record.set_opt("requestBodyValues", e.request_body_values.clone());
    record.set_opt("statusCode", e.status_code.map(Value::from));
    record.set_opt(
        "responseHeaders",
        e.response_headers.as_ref().map(|headers| {
            Value::Object(
                headers
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect::<Map<String, Value>>(),
            )
        }),
    );
    record.set_opt("responseBody", e.response_body.clone().map(Value::from));
    record.set("isRetryable", Value::from(e.is_retryable));
    record.set_opt("data", e.data.clone());
    record
}

pub(crate) fn decode_api_call(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::ApiCall(ApiCallError {
        message,
        cause,
        url: record.string_field("url").unwrap_or_default(),
        request_body_values: record.field("requestBodyValues").cloned(),
        status_code: record.u16_field("statusCode"),
        response_headers: record.string_map_field("responseHeaders"),
        response_body: record.string_field("responseBody"),
        is_retryable: record.bool_field("isRetryable").unwrap_or(false),
        data: record.field("data").cloned(),
    })
}

pub(crate) fn encode_download(error: &SDKError) -> FlatRecord {
    let SDKError::Download(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "DownloadError");
    record.set_str("url", &e.url);
    record.set_opt("statusCode", e.status_code.map(Value::from));
    record.set_opt("statusText", e.status_text.clone().map(Value::from));
    record
}

pub(crate) fn decode_download(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::Download(DownloadError {
        message,
        cause,
        url: record.string_field("url").unwrap_or_default(),
        status_code: record.u16_field("statusCode"),
        status_text: record.string_field("statusText"),
    })
}

pub(crate) fn encode_retry(error: &SDKError) -> FlatRecord {
    let SDKError::Retry(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "RetryError");
    record.set_str("reason", e.reason.as_str());
    record.set(
        "errors",
        Value::Array(
            e.errors
                .iter()
                .map(|error| registry::encode_error(error).into_value())
                .collect(),
        ),
    );
    record
}

pub(crate) fn decode_retry(record: &FlatRecord) -> SDKError {
    let (message, _) = decode_base(record);
    let errors = record
        .array_field("errors")
        .map(|items| {
            items
                .iter()
                .filter_map(|item| FlatRecord::from_value(item.clone()))
                .map(|record| registry::decode_record(&record))
                .collect()
        })
        .unwrap_or_default();
    SDKError::Retry(RetryError {
        message,
        reason: record
            .str_field("reason")
            .and_then(RetryReason::parse)
            .unwrap_or(RetryReason::MaxRetriesExceeded),
        errors,
    })
}
