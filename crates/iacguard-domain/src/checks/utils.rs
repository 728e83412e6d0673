use crate::policy::RuleError;
use globset::{Glob, GlobSet, GlobSetBuilder};

pub fn build_allowlist(rule_id: &str, allow: &[String]) -> Result<Option<GlobSet>, RuleError> {
    if allow.is_empty() {
        return Ok(None);
    }

    let invalid = |pattern: &str, source| RuleError::InvalidAllowPattern {
        rule_id: rule_id.to_string(),
        pattern: pattern.to_string(),
        source,
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        // Allowlist entries are case-sensitive globs over resource names.
        let glob = Glob::new(pattern).map_err(|e| invalid(pattern, e))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| invalid(&allow.join(","), e))?;
    Ok(Some(set))
}

pub fn is_allowed(allow: Option<&GlobSet>, value: &str) -> bool {
    allow.map(|set| set.is_match(value)).unwrap_or(false)
}
