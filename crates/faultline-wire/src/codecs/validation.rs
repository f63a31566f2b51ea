//! Codecs for the validation failure kinds.

use faultline_errors::{
    InvalidArgumentError, InvalidDataContentError, InvalidMessageRoleError, InvalidPromptError,
    InvalidResponseDataError, InvalidStreamPartError, JsonParseError, SDKError,
    TypeValidationError,
};
use serde_json::Value;

use super::{decode_base, encode_generic, encode_named};
use crate::record::{CLASS_NAME, FlatRecord};

pub(crate) fn encode_invalid_argument(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidArgument(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidArgumentError");
    record.set_str("parameter", &e.parameter);
    record.set("value", e.value.clone());
    record
}

pub(crate) fn decode_invalid_argument(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidArgument(InvalidArgumentError {
        message,
        cause,
        parameter: record.string_field("parameter").unwrap_or_default(),
        value: record.field("value").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_invalid_prompt(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidPrompt(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidPromptError");
    record.set("prompt", e.prompt.clone());
    record
}

pub(crate) fn decode_invalid_prompt(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidPrompt(InvalidPromptError {
        message,
        cause,
        prompt: record.field("prompt").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_invalid_message_role(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidMessageRole(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidMessageRoleError");
    record.set_str("role", &e.role);
    record
}

pub(crate) fn decode_invalid_message_role(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidMessageRole(InvalidMessageRoleError {
        message,
        cause,
        role: record.string_field("role").unwrap_or_default(),
    })
}

pub(crate) fn encode_invalid_data_content(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidDataContent(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidDataContentError");
    record.set("content", e.content.clone());
    record
}

pub(crate) fn decode_invalid_data_content(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidDataContent(InvalidDataContentError {
        message,
        cause,
        content: record.field("content").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_invalid_response_data(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidResponseData(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidResponseDataError");
    record.set("data", e.data.clone());
    record
}

pub(crate) fn decode_invalid_response_data(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidResponseData(InvalidResponseDataError {
        message,
        cause,
        data: record.field("data").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_invalid_stream_part(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidStreamPart(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidStreamPartError");
    record.set("chunk", e.chunk.clone());
    record
}

pub(crate) fn decode_invalid_stream_part(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidStreamPart(InvalidStreamPartError {
        message,
        cause,
        chunk: record.field("chunk").cloned().unwrap_or(Value::Null),
    })
}

pub(crate) fn encode_json_parse(error: &SDKError) -> FlatRecord {
    let SDKError::JsonParse(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "JSONParseError");
    record.set_str("text", &e.text);
    record
}

pub(crate) fn decode_json_parse(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::JsonParse(JsonParseError {
        message,
        cause,
        text: record.string_field("text").unwrap_or_default(),
    })
}

pub(crate) fn encode_type_validation(error: &SDKError) -> FlatRecord {
    let SDKError::TypeValidation(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "TypeValidationError");
    record.set("value", e.value.clone());
    record
}

pub(crate) fn decode_type_validation(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::TypeValidation(TypeValidationError {
        message,
        cause,
        value: record.field("value").cloned().unwrap_or(Value::Null),
    })
}
