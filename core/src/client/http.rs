use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{Request, Transport};
use crate::error::{ExportError, Result};

const APPLICATION_JSON: &str = "application/json";

/// 基于 reqwest 的传输实现
///
/// 不保留空闲连接：每个请求的连接在拿到响应后即释放。
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ExportError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<String> {
        let url = request.url().to_string();
        // POST 的 content-type 由 form() 设置
        let builder = match request {
            Request::Get { url } => self.client.get(url).header(CONTENT_TYPE, APPLICATION_JSON),
            Request::Post { url, form } => self.client.post(url).form(&form),
        };

        // HTTP 状态码不作判断，错误由响应体中的 errors 字段表达
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        response.text().await.map_err(|e| transport_error(&url, e))
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> ExportError {
    ExportError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    }
}
