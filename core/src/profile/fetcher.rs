use crate::client::provider::{required_field, DataProvider};
use crate::error::{ExportError, Result};
use crate::profile::model::Rule;

const TOTAL: &str = "total";
const RULES: &str = "rules";

/// 分页拉取质量配置下的全部规则
///
/// 页码从 1 开始，只要 `page * page_size < total` 就继续请求下一页。
/// 任一页失败则整体失败，已累积的规则被丢弃。
pub async fn fetch_rules(provider: &DataProvider, profile_key: &str) -> Result<Vec<Rule>> {
    let config = provider.config();
    let page_size = i64::from(config.page_size);
    let mut rules = Vec::new();
    let mut page: u32 = 1;

    loop {
        let url = config.search_rules_url(profile_key, page);
        let (object, raw) = provider.get(&url).await?;

        let total: i64 = required_field(&object, TOTAL, &raw)?;
        let mut page_rules: Vec<Rule> = required_field(&object, RULES, &raw)?;
        tracing::debug!(
            "Fetched page {} of profile {}: {} rules (total {})",
            page,
            profile_key,
            page_rules.len(),
            total
        );
        rules.append(&mut page_rules);

        if i64::from(page) * page_size >= total {
            break;
        }
        if page >= config.max_pages {
            return Err(ExportError::malformed(
                raw,
                format!(
                    "pagination did not finish after {} pages of {} (reported total {})",
                    config.max_pages, config.page_size, total
                ),
            ));
        }
        page += 1;
    }

    tracing::info!("Fetched {} rules for profile {}", rules.len(), profile_key);
    Ok(rules)
}
