//! 导出配置
//!
//! 所有取值都来自环境变量，缺省值与分析服务器的默认部署一致。
//! 请求模板使用 `{url}`、`{profile}`、`{page}`、`{page_size}`、`{rule}` 占位符。

use crate::error::{ExportError, Result};

pub const ENV_SERVER_URL: &str = "PROFILE_EXPORT_SERVER_URL";
pub const ENV_PAGE_SIZE: &str = "PROFILE_EXPORT_PAGE_SIZE";
pub const ENV_MAX_PAGES: &str = "PROFILE_EXPORT_MAX_PAGES";
pub const ENV_SEARCH_RULES_REQUEST: &str = "PROFILE_EXPORT_SEARCH_RULES_REQUEST";
pub const ENV_RULE_REQUEST: &str = "PROFILE_EXPORT_RULE_REQUEST";
pub const ENV_PROFILES_REQUEST: &str = "PROFILE_EXPORT_PROFILES_REQUEST";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000";
/// 服务端单页允许的最大结果数
pub const DEFAULT_PAGE_SIZE: u32 = 500;
pub const DEFAULT_MAX_PAGES: u32 = 1000;
pub const DEFAULT_SEARCH_RULES_REQUEST: &str =
    "{url}/api/qualityprofiles/search_rules?qprofile={profile}&activation=true&p={page}&ps={page_size}";
pub const DEFAULT_RULE_REQUEST: &str = "{url}/api/rules/show?key={rule}&actives=true";
pub const DEFAULT_PROFILES_REQUEST: &str = "{url}/api/qualityprofiles/search";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub server_url: String,
    pub page_size: u32,
    /// 分页次数上限，防止服务端 total 异常导致死循环
    pub max_pages: u32,
    pub search_rules_request: String,
    pub rule_request: String,
    pub profiles_request: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            search_rules_request: DEFAULT_SEARCH_RULES_REQUEST.to_string(),
            rule_request: DEFAULT_RULE_REQUEST.to_string(),
            profiles_request: DEFAULT_PROFILES_REQUEST.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url: String = server_url.into();
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源构建配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let server_url = lookup(ENV_SERVER_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.server_url);
        if server_url.is_empty() {
            return Err(ExportError::Config(format!("{} must not be empty", ENV_SERVER_URL)));
        }

        let page_size = parse_positive(&lookup, ENV_PAGE_SIZE, defaults.page_size)?;
        let max_pages = parse_positive(&lookup, ENV_MAX_PAGES, defaults.max_pages)?;

        Ok(Self {
            server_url,
            page_size,
            max_pages,
            search_rules_request: lookup(ENV_SEARCH_RULES_REQUEST)
                .unwrap_or(defaults.search_rules_request),
            rule_request: lookup(ENV_RULE_REQUEST).unwrap_or(defaults.rule_request),
            profiles_request: lookup(ENV_PROFILES_REQUEST).unwrap_or(defaults.profiles_request),
        })
    }

    pub fn search_rules_url(&self, profile_key: &str, page: u32) -> String {
        // 调用方给出的键最后填入，其中的占位符文本保持原样
        self.search_rules_request
            .replace("{url}", &self.server_url)
            .replace("{page_size}", &self.page_size.to_string())
            .replace("{page}", &page.to_string())
            .replace("{profile}", profile_key)
    }

    pub fn rule_url(&self, rule_key: &str) -> String {
        self.rule_request
            .replace("{url}", &self.server_url)
            .replace("{rule}", rule_key)
    }

    pub fn profiles_url(&self) -> String {
        self.profiles_request.replace("{url}", &self.server_url)
    }
}

fn parse_positive<F>(lookup: &F, name: &str, default: u32) -> Result<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(0) => Err(ExportError::Config(format!("{} must be greater than zero", name))),
            Ok(value) => Ok(value),
            Err(e) => Err(ExportError::Config(format!(
                "Invalid value '{}' for {}: {}",
                raw, name, e
            ))),
        },
    }
}
