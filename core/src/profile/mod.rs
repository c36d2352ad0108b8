// Profile module - 质量配置模块
// 规则模型、分页拉取、严重级别补全与 CSV 输出

pub mod csv;
pub mod enricher;
pub mod fetcher;
pub mod model;

pub use csv::{to_csv, write_csv, CSV_HEADER};
pub use enricher::enrich_severities;
pub use fetcher::fetch_rules;
pub use model::{merge_severity, ActiveRule, ProfileSummary, QualityProfile, Rule};
