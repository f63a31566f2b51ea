use std::collections::HashMap;
use std::sync::OnceLock;

use faultline_errors::SDKError;

use crate::codecs;
use crate::record::FlatRecord;

/// The encode/decode pair responsible for one wire tag.
pub(crate) struct Codec {
    pub tag: &'static str,
    pub encode: fn(&SDKError) -> FlatRecord,
    pub decode: fn(&FlatRecord) -> SDKError,
}

/// Closed codec list, one entry per taxonomy kind. The generic codec comes
/// first and doubles as the fallback for unknown tags.
static CODECS: [Codec; 22] = [
    Codec {
        tag: "Error",
        encode: codecs::encode_generic,
        decode: codecs::decode_generic,
    },
    Codec {
        tag: "AISDKError",
        encode: codecs::encode_named,
        decode: codecs::decode_named,
    },
    Codec {
        tag: "InvalidArgumentError",
        encode: codecs::validation::encode_invalid_argument,
        decode: codecs::validation::decode_invalid_argument,
    },
    Codec {
        tag: "InvalidPromptError",
        encode: codecs::validation::encode_invalid_prompt,
        decode: codecs::validation::decode_invalid_prompt,
    },
    Codec {
        tag: "InvalidMessageRoleError",
        encode: codecs::validation::encode_invalid_message_role,
        decode: codecs::validation::decode_invalid_message_role,
    },
    Codec {
        tag: "InvalidDataContentError",
        encode: codecs::validation::encode_invalid_data_content,
        decode: codecs::validation::decode_invalid_data_content,
    },
    Codec {
        tag: "InvalidResponseDataError",
        encode: codecs::validation::encode_invalid_response_data,
        decode: codecs::validation::decode_invalid_response_data,
    },
    Codec {
        tag: "InvalidStreamPartError",
        encode: codecs::validation::encode_invalid_stream_part,
        decode: codecs::validation::decode_invalid_stream_part,
    },
    Codec {
        tag: "InvalidToolInputError",
        encode: codecs::tools::encode_invalid_tool_input,
        decode: codecs::tools::decode_invalid_tool_input,
    },
    Codec {
        tag: "JSONParseError",
        encode: codecs::validation::encode_json_parse,
        decode: codecs::validation::decode_json_parse,
    },
    Codec {
        tag: "TypeValidationError",
        encode: codecs::validation::encode_type_validation,
        decode: codecs::validation::decode_type_validation,
    },
    Codec {
        tag: "APICallError",
        encode: codecs::network::encode_api_call,
        decode: codecs::network::decode_api_call,
    },
    Codec {
        tag: "DownloadError",
        encode: codecs::network::encode_download,
        decode: codecs::network::decode_download,
    },
    Codec {
        tag: "RetryError",
        encode: codecs::network::encode_retry,
        decode: codecs::network::decode_retry,
    },
    Codec {
        tag: "NoSuchToolError",
        encode: codecs::tools::encode_no_such_tool,
        decode: codecs::tools::decode_no_such_tool,
    },
    Codec {
        tag: "NoSuchModelError",
        encode: codecs::generation::encode_no_such_model,
        decode: codecs::generation::decode_no_such_model,
    },
    Codec {
        tag: "NoContentGeneratedError",
        encode: codecs::generation::encode_no_content_generated,
        decode: codecs::generation::decode_no_content_generated,
    },
    Codec {
        tag: "NoObjectGeneratedError",
        encode: codecs::generation::encode_no_object_generated,
        decode: codecs::generation::decode_no_object_generated,
    },
    Codec {
        tag: "NoImageGeneratedError",
        encode: codecs::generation::encode_no_image_generated,
        decode: codecs::generation::decode_no_image_generated,
    },
    Codec {
        tag: "MessageConversionError",
        encode: codecs::generation::encode_message_conversion,
        decode: codecs::generation::decode_message_conversion,
    },
    Codec {
        tag: "ToolCallRepairError",
        encode: codecs::tools::encode_tool_call_repair,
        decode: codecs::tools::decode_tool_call_repair,
    },
    Codec {
        tag: "UnsupportedFunctionalityError",
        encode: codecs::generation::encode_unsupported_functionality,
        decode: codecs::generation::decode_unsupported_functionality,
    },
];

static REGISTRY: OnceLock<HashMap<&'static str, &'static Codec>> = OnceLock::new();

/// Built once from the closed codec list; read-only afterwards, so lookups
/// need no locking.
fn registry() -> &'static HashMap<&'static str, &'static Codec> {
    REGISTRY.get_or_init(|| CODECS.iter().map(|codec| (codec.tag, codec)).collect())
}

/// Strips the noise minifiers leave around a class name before lookup.
pub(crate) fn normalize_tag(tag: &str) -> &str {
    tag.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Unknown tags resolve to the generic codec; lookup never fails.
pub(crate) fn codec_for_tag(tag: &str) -> &'static Codec {
    registry()
        .get(normalize_tag(tag))
        .copied()
        .unwrap_or(&CODECS[0])
}

pub(crate) fn encode_error(error: &SDKError) -> FlatRecord {
    (codec_for_tag(error.tag()).encode)(error)
}

pub(crate) fn decode_record(record: &FlatRecord) -> SDKError {
    let codec = codec_for_tag(record.class_name().unwrap_or("Error"));
    (codec.decode)(record)
}
