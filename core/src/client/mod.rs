// Client module - 远程请求模块
// 定义传输层接口、请求类型以及 URL 预处理

pub mod http;
pub mod provider;
pub mod validator;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use http::HttpTransport;
pub use provider::DataProvider;

use crate::error::Result;

/// 一次远程请求
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get { url: String },
    Post { url: String, form: Vec<(String, String)> },
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Request::Get { url: url.into() }
    }

    pub fn post(url: impl Into<String>, form: Vec<(String, String)>) -> Self {
        Request::Post {
            url: url.into(),
            form,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Request::Get { url } | Request::Post { url, .. } => url,
        }
    }
}

/// 传输层 trait - 执行请求并返回原始响应体
///
/// 实现必须是无状态的：同一个实例会被并发的多次导出共享。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<String>;
}

/// 发送前转义空格和 `+`，规则键和配置键里可能合法地出现这两个字符
pub fn prepare_url(url: &str) -> String {
    url.replace(' ', "%20").replace('+', "%2B")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_plus_signs_are_escaped() {
        assert_eq!(
            prepare_url("http://host/api/rules/show?key=c++:My Rule"),
            "http://host/api/rules/show?key=c%2B%2B:My%20Rule"
        );
    }

    #[test]
    fn other_characters_are_left_alone() {
        let url = "http://host/api/rules/show?key=squid:S1&x=ä/#";
        assert_eq!(prepare_url(url), url);
    }

    #[test]
    fn request_exposes_its_url() {
        assert_eq!(Request::get("http://a").url(), "http://a");
        assert_eq!(Request::post("http://b", vec![]).url(), "http://b");
    }
}
