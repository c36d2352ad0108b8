use std::fmt;

use super::model::QualityProfile;

pub const CSV_HEADER: &str = "Key;Name;Language;Repository;Severity;Type";
const SEPARATOR: &str = ";";
const NEW_LINE: &str = "\n";

/// 输出分号分隔的报表，字段内容不做转义
pub fn write_csv<W: fmt::Write>(profile: &QualityProfile, out: &mut W) -> fmt::Result {
    out.write_str(CSV_HEADER)?;
    out.write_str(NEW_LINE)?;

    for rule in profile.rules() {
        let fields = [
            rule.key.as_str(),
            rule.name.as_str(),
            rule.lang_name.as_str(),
            rule.repo.as_str(),
            rule.active_severity.as_deref().unwrap_or(""),
            rule.rule_type.as_str(),
        ];
        out.write_str(&fields.join(SEPARATOR))?;
        out.write_str(NEW_LINE)?;
    }
    Ok(())
}

pub fn to_csv(profile: &QualityProfile) -> String {
    profile.to_string()
}

impl fmt::Display for QualityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_csv(self, f)
    }
}
