//! 响应校验：区分"服务端拒绝"、"服务端返回垃圾"两种失败。

use serde_json::{Map, Value};

use crate::error::{ExportError, Result};

const ERRORS: &str = "errors";
const MSG: &str = "msg";
const UNKNOWN_ERROR: &str = "server reported an error without a message";

/// 将原始响应体解析为 JSON 对象，并检查 `errors` 字段
pub fn parse_response(raw: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        tracing::debug!("Failed to parse server response: {}", e);
        ExportError::malformed(raw, e.to_string())
    })?;

    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(ExportError::malformed(
                raw,
                format!("expected a JSON object, got {}", json_kind(&other)),
            ))
        }
    };

    if let Some(errors) = object.get(ERRORS) {
        return Err(ExportError::Rejected(first_error_message(errors)));
    }

    Ok(object)
}

fn first_error_message(errors: &Value) -> String {
    errors
        .as_array()
        .and_then(|errors| errors.first())
        .and_then(|error| error.get(MSG))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
