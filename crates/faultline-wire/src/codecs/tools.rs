//! Codecs for the tool failure kinds.

use faultline_errors::{InvalidToolInputError, NoSuchToolError, SDKError, ToolCallRepairError};
use serde_json::Value;

use super::{decode_base, decode_error_field, encode_generic, encode_named};
use crate::record::{CLASS_NAME, FlatRecord};
use crate::registry;

pub(crate) fn encode_invalid_tool_input(error: &SDKError) -> FlatRecord {
    let SDKError::InvalidToolInput(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "InvalidToolInputError");
    record.set_str("toolName", &e.tool_name);
    record.set_str("toolInput", &e.tool_input);
    record
}

pub(crate) fn decode_invalid_tool_input(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::InvalidToolInput(InvalidToolInputError {
        message,
        cause,
        tool_name: record.string_field("toolName").unwrap_or_default(),
        tool_input: record.string_field("toolInput").unwrap_or_default(),
    })
}

pub(crate) fn encode_no_such_tool(error: &SDKError) -> FlatRecord {
    let SDKError::NoSuchTool(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "NoSuchToolError");
    record.set_str("toolName", &e.tool_name);
    record.set_opt(
        "availableTools",
        e.available_tools.clone().map(Value::from),
    );
    record
}

pub(crate) fn decode_no_such_tool(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::NoSuchTool(NoSuchToolError {
        message,
        cause,
        tool_name: record.string_field("toolName").unwrap_or_default(),
        available_tools: record.string_array_field("availableTools"),
    })
}

pub(crate) fn encode_tool_call_repair(error: &SDKError) -> FlatRecord {
    let SDKError::ToolCallRepair(e) = error else {
        return encode_generic(error);
    };
    let mut record = encode_named(error);
    record.set_str(CLASS_NAME, "ToolCallRepairError");
    record.set(
        "originalError",
        registry::encode_error(&e.original_error).into_value(),
    );
    record
}

pub(crate) fn decode_tool_call_repair(record: &FlatRecord) -> SDKError {
    let (message, cause) = decode_base(record);
    SDKError::ToolCallRepair(ToolCallRepairError {
        message,
        cause,
        original_error: Box::new(decode_error_field(record.field("originalError"))),
    })
}
