use serde::{Deserialize, Serialize};

/// 分析规则
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Rule {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "langName", default)]
    pub lang_name: String,
    #[serde(default)]
    pub repo: String,
    #[serde(rename = "type", default)]
    pub rule_type: String,
    /// 在目标质量配置中生效的严重级别，补全前为 None
    #[serde(rename = "activeSeverity", default, skip_serializing_if = "Option::is_none")]
    pub active_severity: Option<String>,
}

/// 规则在某个质量配置中的激活记录
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ActiveRule {
    #[serde(rename = "qProfile")]
    pub q_profile: String,
    #[serde(default)]
    pub severity: Option<String>,
}

impl ActiveRule {
    /// 线性查找第一个属于目标配置的记录
    pub fn find<'a>(actives: &'a [ActiveRule], profile_key: &str) -> Option<&'a ActiveRule> {
        actives.iter().find(|active| active.q_profile == profile_key)
    }
}

/// 服务端列出的质量配置概要
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfileSummary {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "languageName", default)]
    pub language: String,
}

/// 导出的质量配置
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityProfile {
    key: String,
    rules: Vec<Rule>,
}

impl QualityProfile {
    pub fn new(key: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            key: key.into(),
            rules,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// 整体替换规则集合
    pub fn set_rules(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
    }

    pub fn find(&self, rule_key: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.key == rule_key)
    }
}

/// 将目标配置的严重级别合并进规则，返回新的规则值
pub fn merge_severity(rule: Rule, actives: &[ActiveRule], profile_key: &str) -> Rule {
    match ActiveRule::find(actives, profile_key) {
        Some(active) => Rule {
            active_severity: active.severity.clone(),
            ..rule
        },
        None => rule,
    }
}
