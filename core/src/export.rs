use std::sync::Arc;

use crate::client::provider::{required_field, DataProvider};
use crate::client::{HttpTransport, Transport};
use crate::config::ExportConfig;
use crate::error::Result;
use crate::profile::{enrich_severities, fetch_rules, to_csv, ProfileSummary, QualityProfile};

const PROFILES: &str = "profiles";

/// 质量配置导出器
///
/// 可在多个并发导出之间共享；单次导出内部的请求严格顺序执行。
#[derive(Clone)]
pub struct ProfileExporter {
    provider: DataProvider,
}

impl ProfileExporter {
    pub fn new(transport: Arc<dyn Transport>, config: ExportConfig) -> Self {
        Self {
            provider: DataProvider::new(transport, Arc::new(config)),
        }
    }

    /// 使用 reqwest 传输层
    pub fn with_http(config: ExportConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new()?), config))
    }

    pub fn config(&self) -> &ExportConfig {
        self.provider.config()
    }

    /// 拉取并组装质量配置
    pub async fn create(&self, profile_key: &str) -> Result<QualityProfile> {
        let rules = fetch_rules(&self.provider, profile_key).await?;
        let rules = enrich_severities(&self.provider, rules, profile_key).await?;
        Ok(QualityProfile::new(profile_key, rules))
    }

    /// 导出为 CSV 文本
    pub async fn export(&self, profile_key: &str) -> Result<String> {
        tracing::info!("Exporting quality profile {}", profile_key);
        let profile = self.create(profile_key).await?;
        let csv = to_csv(&profile);
        tracing::info!(
            "Exported quality profile {} ({} rules)",
            profile.key(),
            profile.rules().len()
        );
        Ok(csv)
    }

    pub async fn list_profiles(&self) -> Result<Vec<ProfileSummary>> {
        let url = self.config().profiles_url();
        let (object, raw) = self.provider.get(&url).await?;
        required_field(&object, PROFILES, &raw)
    }
}
