//! Codecs for the model resolution and generation-outcome kinds.

use faultline_errors::{
    MessageConversionError, ModelType, NoContentGeneratedError, NoImageGeneratedError,
    NoObjectGeneratedError, NoSuchModelError, ResponseMetadata, SDKError, TokenUsage,
    UnsupportedFunctionalityError,
};
use serde_json::{Map, Value};

use super::{decode_base, encode_generic, encode_named};
use crate::record::{CLASS_NAME, FlatRecord};

pub(crate) fn encode_no_such_model(error: &SDKError) -> FlatRecord {
    let SDKError::NoSuchModel(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "NoSuchModelError");
    record.set_str("modelId", &e.model_id);
    record.set_str("modelType", e.model_type.as_str());
    record
}

pub(crate) fn decode_no_such_model(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::NoSuchModel(NoSuchModelError {
        message,
        cause,
        model_id: record.string_field("modelId").unwrap_or_default(),
        model_type: record
            .str_field("modelType")
            .and_then(ModelType::parse)
            .unwrap_or(ModelType::LanguageModel),
    })
}

pub(crate) fn encode_no_content_generated(error: &SDKError) -> FlatRecord {
    let SDKError::NoContentGenerated(_) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "NoContentGeneratedError");
    record
}

pub(crate) fn decode_no_content_generated(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::NoContentGenerated(NoContentGeneratedError { message, cause })
}

pub(crate) fn encode_no_object_generated(error: &SDKError) -> FlatRecord {
    let SDKError::NoObjectGenerated(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "NoObjectGeneratedError");
    record.set_opt("text", e.text.clone().map(Value::from));
    record.set_opt(
        "response",
        e.response.as_ref().map(response_metadata_to_value),
    );
    record.set_opt("usage", e.usage.as_ref().map(usage_to_value));
    record.set_opt("finishReason", e.finish_reason.clone().map(Value::from));
    record
}

pub(crate) fn decode_no_object_generated(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::NoObjectGenerated(NoObjectGeneratedError {
        message,
        cause,
        text: record.string_field("text"),
        response: record.field("response").and_then(value_to_response_metadata),
        usage: record.field("usage").and_then(value_to_usage),
        finish_reason: record.string_field("finishReason"),
    })
}

pub(crate) fn encode_no_image_generated(error: &SDKError) -> FlatRecord {
    let SDKError::NoImageGenerated(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "NoImageGeneratedError");
    record.set_opt(
        "responses",
        e.responses.as_ref().map(|responses| {
            Value::Array(responses.iter().map(response_metadata_to_value).collect())
        }),
    );
    record
}

pub(crate) fn decode_no_image_generated(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::NoImageGenerated(NoImageGeneratedError {
        message,
        cause,
        responses: record.array_field("responses").map(|items| {
            items.iter().filter_map(value_to_response_metadata).collect()
        }),
    })
}

pub(crate) fn encode_message_conversion(error: &SDKError) -> FlatRecord {
    let SDKError::MessageConversion(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "MessageConversionError");
    record.set("originalMessage", e.original_message.clone());
    record
}

pub(crate) fn decode_message_conversion(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::MessageConversion(MessageConversionError {
        message,
        cause,
        original_message: record.field("originalMessage").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_unsupported_functionality(error: &SDKError) -> FlatRecord {
    let SDKError::UnsupportedFunctionality(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "UnsupportedFunctionalityError");
    record.set_str("functionality", &e.functionality);
    record
}

pub(crate) fn decode_unsupported_functionality(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::UnsupportedFunctionality(UnsupportedFunctionalityError {
        message,
        cause,
        functionality: record.string_field("functionality").unwrap_or_default(),
    })
}

fn response_metadata_to_value(metadata: &ResponseMetadata) -> Value {
    let mut fields = Map::new();
    fields.insert("id".to_string(), Value::from(metadata.id.as_str()));
    fields.insert(
        "modelId".to_string(),
        Value::from(metadata.model_id.as_str()),
    );
    fields.insert(
        "timestamp".to_string(),
        Value::from(metadata.timestamp.as_str()),
    );
    Value::Object(fields)
}

fn value_to_response_metadata(value: &Value) -> Option<ResponseMetadata> {
    let fields = value.as_object()?;
    Some(ResponseMetadata {
        id: fields.get("id")?.as_str()?.to_string(),
        model_id: fields.get("modelId")?.as_str()?.to_string(),
        timestamp: fields.get("timestamp")?.as_str()?.to_string(),
    })
}

fn usage_to_value(usage: &TokenUsage) -> Value {
    let mut fields = Map::new();
    fields.insert("inputTokens".to_string(), Value::from(usage.input_tokens));
    fields.insert("outputTokens".to_string(), Value::from(usage.output_tokens));
    fields.insert("totalTokens".to_string(), Value::from(usage.total_tokens));
    Value::Object(fields)
}

fn value_to_usage(value: &Value) -> Option<TokenUsage> {
    let fields = value.as_object()?;
    Some(TokenUsage {
        input_tokens: fields.get("inputTokens")?.as_u64()?,
        output_tokens: fields.get("outputTokens")?.as_u64()?,
        total_tokens: fields.get("totalTokens")?.as_u64()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_metadata_value_round_trip() {
        let metadata = ResponseMetadata {
            id: "resp-1".to_string(),
            model_id: "agent-large".to_string(),
            timestamp: "2026-02-10T10:00:00Z".to_string(),
        };
        let value = response_metadata_to_value(&metadata);
        assert_eq!(value_to_response_metadata(&value), Some(metadata));
    }

    #[test]
    fn value_to_usage_missing_field_expected_none() {
        let value = json!({"inputTokens": 10, "outputTokens": 20});
        assert_eq!(value_to_usage(&value), None);
    }
}
