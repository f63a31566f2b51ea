use std::collections::BTreeMap;

use faultline_errors::{
    ApiCallError, DownloadError, ErrorCause, GenericError, InvalidArgumentError,
    InvalidDataContentError, InvalidMessageRoleError, InvalidPromptError, InvalidResponseDataError,
    InvalidStreamPartError, InvalidToolInputError, JsonParseError, MessageConversionError,
    ModelType, NamedError, NoContentGeneratedError, NoImageGeneratedError, NoObjectGeneratedError,
    NoSuchModelError, NoSuchToolError, ResponseMetadata, RetryError, RetryReason, SDKError,
    TokenUsage, ToolCallRepairError, TypeValidationError, UnsupportedFunctionalityError,
};
use faultline_wire::{deserialize_error, serialize_error};
use serde_json::json;

fn round_trip(error: SDKError) -> SDKError {
    let payload = serialize_error(&error);
    deserialize_error(&payload).expect("payload should decode")
}

fn assert_round_trips(error: SDKError) {
    assert_eq!(round_trip(error.clone()), error);
}

#[test]
fn generic_error_round_trip_expected_message_and_no_cause() {
    let decoded = round_trip(GenericError::new("boom").into());
    assert_eq!(decoded.message(), "boom");
    assert_eq!(decoded.cause(), None);
    assert_round_trips(GenericError::new("boom").into());
}

#[test]
fn named_error_round_trip_preserves_subtype_name() {
    let error = NamedError::new("QuotaExceededError", "monthly quota exhausted");
    let decoded = round_trip(error.clone().into());
    assert_eq!(decoded, SDKError::Named(error));
}

#[test]
fn every_validation_kind_round_trips() {
    assert_round_trips(
        InvalidArgumentError::new("temperature", json!(4.2), "must be <= 2.0").into(),
    );
    assert_round_trips(InvalidPromptError::new(json!({"messages": []}), "no messages").into());
    assert_round_trips(InvalidMessageRoleError::new("moderator").into());
    assert_round_trips(InvalidDataContentError::new(json!({"kind": "blob"})).into());
    assert_round_trips(InvalidResponseDataError::new(json!({"choices": null})).into());
    assert_round_trips(
        InvalidStreamPartError::new(json!("data: <<garbage>>"), "unknown frame").into(),
    );
    assert_round_trips(JsonParseError::new("{\"broken\":").into());
    assert_round_trips(TypeValidationError::new(json!({"age": "eleven"})).into());
}

#[test]
fn every_generation_kind_round_trips() {
    assert_round_trips(NoSuchModelError::new("agent-xl", ModelType::LanguageModel).into());
    assert_round_trips(NoSuchModelError::new("embed-3", ModelType::TextEmbeddingModel).into());
    assert_round_trips(NoContentGeneratedError::new().into());
    assert_round_trips(
        MessageConversionError::new(json!({"role": "tool"}), "tool results not supported").into(),
    );
    assert_round_trips(UnsupportedFunctionalityError::new("audio input").into());

    let full = NoObjectGeneratedError {
        text: Some("not an object".to_string()),
        response: Some(ResponseMetadata {
            id: "resp-9".to_string(),
            model_id: "agent-large".to_string(),
            timestamp: "2026-02-10T10:00:00Z".to_string(),
        }),
        usage: Some(TokenUsage {
            input_tokens: 120,
            output_tokens: 40,
            total_tokens: 160,
        }),
        finish_reason: Some("length".to_string()),
        ..NoObjectGeneratedError::new()
    };
    assert_round_trips(full.into());

    let responses = vec![
        ResponseMetadata {
            id: "img-1".to_string(),
            model_id: "painter-2".to_string(),
            timestamp: "2026-02-10T10:00:00Z".to_string(),
        },
        ResponseMetadata {
            id: "img-2".to_string(),
            model_id: "painter-2".to_string(),
            timestamp: "2026-02-10T10:00:05Z".to_string(),
        },
    ];
    assert_round_trips(NoImageGeneratedError::new(Some(responses)).into());
}

#[test]
fn absent_optional_fields_stay_absent() {
    assert_round_trips(NoObjectGeneratedError::new().into());
    assert_round_trips(NoImageGeneratedError::new(None).into());
    assert_round_trips(NoSuchToolError::new("search", None).into());
    assert_round_trips(DownloadError::new("https://cdn.example.com/a.png", None, None).into());
    assert_round_trips(ApiCallError::new("connect timeout", "https://api.example.com/v1").into());

    let payload = serialize_error(&NoSuchToolError::new("search", None).into());
    assert!(!payload.contains("availableTools"));
}

#[test]
fn api_call_error_round_trip_preserves_every_field() {
    let mut headers = BTreeMap::new();
    headers.insert("retry-after".to_string(), "30".to_string());
    headers.insert("x-request-id".to_string(), "req-77".to_string());

    let error = ApiCallError {
        request_body_values: Some(json!({"model": "agent-large", "stream": true})),
        response_headers: Some(headers),
        data: Some(json!({"code": "rate_limited"})),
        ..ApiCallError::new("rate limited", "https://api.example.com/v1/chat")
            .with_status(429)
            .with_response_body("{\"error\":\"slow down\"}")
    };
    assert!(error.is_retryable);
    assert_round_trips(error.into());
}

#[test]
fn download_error_round_trip_preserves_status() {
    let error = DownloadError::new(
        "https://cdn.example.com/a.png",
        Some(404),
        Some("Not Found".to_string()),
    );
    let decoded = round_trip(error.clone().into());
    assert_eq!(decoded, SDKError::Download(error));
}

#[test]
fn no_such_tool_round_trip_preserves_tool_listing() {
    let error = NoSuchToolError::new(
        "search",
        Some(vec!["search".to_string(), "calc".to_string()]),
    );
    let decoded = round_trip(error.clone().into());
    let SDKError::NoSuchTool(decoded) = decoded else {
        panic!("expected NoSuchToolError, got {decoded:?}");
    };
    assert_eq!(decoded.tool_name, "search");
    assert_eq!(
        decoded.available_tools,
        Some(vec!["search".to_string(), "calc".to_string()])
    );
    assert_eq!(decoded.message, error.message);
}

#[test]
fn retry_error_round_trip_reconstructs_sub_errors() {
    let first = ApiCallError::new("upstream 500", "https://api.example.com/v1").with_status(500);
    let second = ApiCallError::new("upstream 503", "https://api.example.com/v1").with_status(503);
    let error = RetryError::new(
        "failed after 2 attempts",
        RetryReason::MaxRetriesExceeded,
        vec![first.clone().into(), second.clone().into()],
    );

    let decoded = round_trip(error.into());
    let SDKError::Retry(decoded) = decoded else {
        panic!("expected RetryError, got {decoded:?}");
    };
    assert_eq!(decoded.reason, RetryReason::MaxRetriesExceeded);
    assert_eq!(decoded.errors.len(), 2);
    let SDKError::ApiCall(first_decoded) = &decoded.errors[0] else {
        panic!("expected APICallError, got {:?}", decoded.errors[0]);
    };
    assert_eq!(first_decoded.status_code, Some(500));
    assert_eq!(first_decoded.url, first.url);
    let SDKError::ApiCall(second_decoded) = &decoded.errors[1] else {
        panic!("expected APICallError, got {:?}", decoded.errors[1]);
    };
    assert_eq!(second_decoded.status_code, Some(503));
}

#[test]
fn tool_call_repair_round_trip_reconstructs_original_error() {
    let original = InvalidToolInputError::new("search", "{\"query\":");
    let error = ToolCallRepairError::new(
        original.clone(),
        ErrorCause::error(GenericError::new("repair model unavailable")),
    );

    let decoded = round_trip(error.into());
    let SDKError::ToolCallRepair(decoded) = decoded else {
        panic!("expected ToolCallRepairError, got {decoded:?}");
    };
    let SDKError::InvalidToolInput(nested) = decoded.original_error.as_ref() else {
        panic!("expected InvalidToolInputError, got {:?}", decoded.original_error);
    };
    assert_eq!(nested.tool_name, original.tool_name);
    assert_eq!(nested.tool_input, original.tool_input);
    assert_eq!(
        decoded.cause.as_deref().and_then(ErrorCause::as_error),
        Some(&SDKError::Generic(GenericError::new(
            "repair model unavailable"
        )))
    );
}

#[test]
fn cause_chain_round_trips_three_levels_deep() {
    let level3 = JsonParseError::new("{\"broken\":");
    let level2 = TypeValidationError::new(json!({"age": "eleven"}))
        .caused_by(ErrorCause::error(level3.clone()));
    let level1 = InvalidToolInputError::new("search", "{\"age\": \"eleven\"}")
        .caused_by(ErrorCause::error(level2.clone()));

    let decoded = round_trip(level1.clone().into());
    assert_eq!(decoded, SDKError::InvalidToolInput(level1));

    // The nested cause decodes identically to a fresh decode of the inner
    // error alone.
    let inner_alone = round_trip(level2.into());
    let SDKError::InvalidToolInput(outer) = decoded else {
        panic!("expected InvalidToolInputError");
    };
    assert_eq!(
        outer.cause.as_deref().and_then(ErrorCause::as_error),
        Some(&inner_alone)
    );
}

#[test]
fn non_error_cause_value_passes_through() {
    let error =
        GenericError::new("wrapped raw value").caused_by(ErrorCause::value(json!({"errno": -13})));
    let decoded = round_trip(error.clone().into());
    assert_eq!(decoded, SDKError::Generic(error));
}

#[test]
fn unknown_class_name_decodes_as_generic_with_message() {
    let payload = "{\"className\":\"WorkspaceQuotaError\",\"message\":\"custom failure\",\"limit\":5}";
    let decoded = deserialize_error(payload).expect("unknown tags should still decode");
    assert_eq!(
        decoded,
        SDKError::Generic(GenericError::new("custom failure"))
    );
}

#[test]
fn mangled_class_name_normalizes_before_lookup() {
    let error = NoSuchToolError::new("search", Some(vec!["calc".to_string()]));
    let payload = serialize_error(&error.clone().into())
        .replace("\"className\":\"NoSuchToolError\"", "\"className\":\"_NoSuchToolError$\"");

    let decoded = deserialize_error(&payload).expect("mangled tag should decode");
    assert_eq!(decoded, SDKError::NoSuchTool(error));
}

#[test]
fn unknown_tagged_cause_degrades_to_generic_cause() {
    let payload = concat!(
        "{\"className\":\"Error\",\"message\":\"outer\",",
        "\"cause\":{\"className\":\"MysteryError\",\"message\":\"inner\"}}"
    );
    let decoded = deserialize_error(payload).expect("payload should decode");
    assert_eq!(
        decoded.cause().and_then(ErrorCause::as_error),
        Some(&SDKError::Generic(GenericError::new("inner")))
    );
}

#[test]
fn serialized_payload_is_a_single_json_line() {
    let error = ApiCallError::new("boom", "https://api.example.com")
        .with_status(500)
        .with_response_body("line one\nline two");
    let payload = serialize_error(&error.into());
    assert!(!payload.contains('\n'));
    assert!(payload.starts_with('{') && payload.ends_with('}'));
}
