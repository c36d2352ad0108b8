use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::validator::parse_response;
use super::{prepare_url, Request, Transport};
use crate::config::ExportConfig;
use crate::error::{ExportError, Result};

/// 数据提供者：URL 预处理 -> 发送 -> 校验
#[derive(Clone)]
pub struct DataProvider {
    transport: Arc<dyn Transport>,
    config: Arc<ExportConfig>,
}

impl DataProvider {
    pub fn new(transport: Arc<dyn Transport>, config: Arc<ExportConfig>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// 发送 GET 请求并返回校验后的 JSON 对象，以及原始响应体（用于诊断）
    pub async fn get(&self, url: &str) -> Result<(Map<String, Value>, String)> {
        let prepared = prepare_url(url);
        tracing::debug!("GET {}", prepared);
        let raw = self.transport.execute(Request::get(prepared)).await?;
        let object = parse_response(&raw)?;
        Ok((object, raw))
    }

    pub async fn post(&self, url: &str, form: Vec<(String, String)>) -> Result<Map<String, Value>> {
        let prepared = prepare_url(url);
        tracing::debug!("POST {}", prepared);
        let raw = self.transport.execute(Request::post(prepared, form)).await?;
        parse_response(&raw)
    }
}

/// 从响应对象中取出必需字段并反序列化
pub fn required_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    field: &str,
    raw: &str,
) -> Result<T> {
    let value = object
        .get(field)
        .ok_or_else(|| ExportError::malformed(raw, format!("missing field `{}`", field)))?;
    decode_field(value, field, raw)
}

/// 可选字段，缺失时返回默认值
pub fn optional_field<T: DeserializeOwned + Default>(
    object: &Map<String, Value>,
    field: &str,
    raw: &str,
) -> Result<T> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => decode_field(value, field, raw),
    }
}

fn decode_field<T: DeserializeOwned>(value: &Value, field: &str, raw: &str) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| ExportError::malformed(raw, format!("invalid field `{}`: {}", field, e)))
}
