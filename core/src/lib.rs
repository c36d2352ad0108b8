// Profile Export Core Library
// 核心功能库，包含远程请求、质量配置拉取、严重级别补全和 CSV 导出

pub mod client;
pub mod config;
pub mod export;
pub mod profile;

// 重新导出常用类型
pub use client::{prepare_url, HttpTransport, Request, Transport};
pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use export::ProfileExporter;
pub use profile::{ActiveRule, ProfileSummary, QualityProfile, Rule};

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ExportError {
        /// 网络不可达、连接被重置等，不做重试
        #[error("Transport error on {url}: {message}")]
        Transport { url: String, message: String },

        /// 服务端返回的内容无法解析
        #[error("Malformed response ({reason}); server answered: {raw}")]
        MalformedResponse { raw: String, reason: String },

        /// 服务端理解了请求但拒绝执行
        #[error("Remote server rejected the request: {0}")]
        Rejected(String),

        /// 配置取值非法
        #[error("Config error: {0}")]
        Config(String),
    }

    impl ExportError {
        pub fn malformed(raw: impl Into<String>, reason: impl Into<String>) -> Self {
            ExportError::MalformedResponse {
                raw: raw.into(),
                reason: reason.into(),
            }
        }
    }

    pub type Result<T> = std::result::Result<T, ExportError>;
}
