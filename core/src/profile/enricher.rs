use crate::client::provider::{optional_field, DataProvider};
use crate::error::Result;
use crate::profile::model::{merge_severity, ActiveRule, Rule};

const ACTIVES: &str = "actives";

/// 为每条规则查询详情，补全其在目标配置中的严重级别
///
/// 每条规则一次请求，顺序执行；任一请求失败则整体失败。
pub async fn enrich_severities(
    provider: &DataProvider,
    rules: Vec<Rule>,
    profile_key: &str,
) -> Result<Vec<Rule>> {
    let mut enriched = Vec::with_capacity(rules.len());

    for rule in rules {
        let url = provider.config().rule_url(&rule.key);
        let (object, raw) = provider.get(&url).await?;
        let actives: Vec<ActiveRule> = optional_field(&object, ACTIVES, &raw)?;

        let rule = merge_severity(rule, &actives, profile_key);
        if rule.active_severity.is_none() {
            tracing::debug!("Rule {} has no active severity in {}", rule.key, profile_key);
        }
        enriched.push(rule);
    }

    tracing::info!("Resolved severities of {} rules for profile {}", enriched.len(), profile_key);
    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedTransport;
    use crate::config::ExportConfig;
    use crate::error::ExportError;
    use serde_json::json;
    use std::sync::Arc;

    fn rule(key: &str) -> Rule {
        Rule {
            key: key.to_string(),
            name: key.to_string(),
            lang_name: "Java".to_string(),
            repo: "squid".to_string(),
            rule_type: "BUG".to_string(),
            active_severity: None,
        }
    }

    fn provider(transport: Arc<ScriptedTransport>, config: &ExportConfig) -> DataProvider {
        DataProvider::new(transport, Arc::new(config.clone()))
    }

    #[tokio::test]
    async fn one_detail_request_per_rule_in_order() {
        let config = ExportConfig::new("http://host");
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(
                    config.rule_url("a"),
                    json!({"rule": {"key": "a"}, "actives": [
                        {"qProfile": "other", "severity": "MINOR"},
                        {"qProfile": "cnes_java", "severity": "BLOCKER"}
                    ]})
                    .to_string(),
                )
                .respond(
                    config.rule_url("b"),
                    json!({"actives": [{"qProfile": "other", "severity": "MAJOR"}]}).to_string(),
                )
                .respond(
                    config.rule_url("c"),
                    json!({"actives": [{"qProfile": "cnes_java", "severity": "INFO"}]}).to_string(),
                ),
        );

        let rules = enrich_severities(
            &provider(transport.clone(), &config),
            vec![rule("a"), rule("b"), rule("c")],
            "cnes_java",
        )
        .await
        .unwrap();

        let severities: Vec<_> = rules.iter().map(|r| r.active_severity.as_deref()).collect();
        assert_eq!(severities, vec![Some("BLOCKER"), None, Some("INFO")]);
        assert_eq!(
            transport.calls(),
            vec![config.rule_url("a"), config.rule_url("b"), config.rule_url("c")]
        );
    }

    #[tokio::test]
    async fn missing_actives_means_no_severity() {
        let config = ExportConfig::new("http://host");
        let transport =
            Arc::new(ScriptedTransport::new().respond(config.rule_url("a"), r#"{"rule":{"key":"a"}}"#));

        let rules = enrich_severities(&provider(transport, &config), vec![rule("a")], "cnes_java")
            .await
            .unwrap();
        assert_eq!(rules[0].active_severity, None);
    }

    #[tokio::test]
    async fn rule_keys_with_plus_are_escaped() {
        let config = ExportConfig::new("http://host");
        let transport = Arc::new(ScriptedTransport::new().respond(
            "http://host/api/rules/show?key=c%2B%2B:S1&actives=true",
            r#"{"actives":[]}"#,
        ));

        enrich_severities(&provider(transport.clone(), &config), vec![rule("c++:S1")], "p")
            .await
            .unwrap();
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn single_failure_aborts_enrichment() {
        let config = ExportConfig::new("http://host");
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond(config.rule_url("a"), r#"{"actives":[]}"#)
                .respond(config.rule_url("b"), "not json")
                .respond(config.rule_url("c"), r#"{"actives":[]}"#),
        );

        let err = enrich_severities(
            &provider(transport.clone(), &config),
            vec![rule("a"), rule("b"), rule("c")],
            "p",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ExportError::MalformedResponse { raw, .. } if raw == "not json"));
        // 失败后不再继续请求
        assert_eq!(transport.calls().len(), 2);
    }
}
