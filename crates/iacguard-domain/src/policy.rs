use crate::checks::utils::{build_allowlist, is_allowed};
use crate::model::Resource;
use globset::GlobSet;
use iacguard_types::EnforcementLevel;
use thiserror::Error;

/// A rule predicate: pure, total, at most one message per resource.
pub type Predicate = fn(&Resource) -> Option<String>;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid allow glob for {rule_id}: {pattern}")]
    InvalidAllowPattern {
        rule_id: String,
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A named predicate checking one compliance control against one resource kind.
#[derive(Clone, Debug)]
pub struct Rule {
    id: String,
    description: String,
    target_kind: String,
    control_id: String,
    predicate: Predicate,
    enforcement: Option<EnforcementLevel>,
    allow_patterns: Vec<String>,
    allow: Option<GlobSet>,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        target_kind: impl Into<String>,
        control_id: impl Into<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            target_kind: target_kind.into(),
            control_id: control_id.into(),
            predicate,
            enforcement: None,
            allow_patterns: Vec::new(),
            allow: None,
        }
    }

    /// Override the pack-level enforcement for this rule only.
    pub fn with_enforcement(mut self, level: EnforcementLevel) -> Self {
        self.enforcement = Some(level);
        self
    }

    /// Exempt resources whose name matches any of the glob patterns.
    pub fn with_allowlist(mut self, patterns: &[String]) -> Result<Self, RuleError> {
        self.allow = build_allowlist(&self.id, patterns)?;
        self.allow_patterns = patterns.to_vec();
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target_kind(&self) -> &str {
        &self.target_kind
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    pub fn enforcement(&self) -> Option<EnforcementLevel> {
        self.enforcement
    }

    pub fn allow_patterns(&self) -> &[String] {
        &self.allow_patterns
    }

    /// Rule-level override if set, otherwise the given default.
    pub fn effective_enforcement(&self, default: EnforcementLevel) -> EnforcementLevel {
        self.enforcement.unwrap_or(default)
    }

    /// Exact kind match, and the resource is not allowlisted.
    pub fn applies_to(&self, resource: &Resource) -> bool {
        resource.kind() == self.target_kind && !is_allowed(self.allow.as_ref(), resource.name())
    }

    pub fn check(&self, resource: &Resource) -> Option<String> {
        (self.predicate)(resource)
    }
}

/// An ordered set of rules plus the enforcement level applied to their violations.
#[derive(Clone, Debug)]
pub struct PolicyPack {
    name: String,
    enforcement: EnforcementLevel,
    rules: Vec<Rule>,
}

impl PolicyPack {
    pub fn new(name: impl Into<String>, enforcement: EnforcementLevel, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            enforcement,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn enforcement(&self) -> EnforcementLevel {
        self.enforcement
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }
}

/// When the caller should treat a report as a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    /// Report only.
    Never,
    /// Fail when any mandatory violation exists.
    Mandatory,
    /// Fail on any violation, advisory included.
    Any,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_violations: usize,
    pub pack: PolicyPack,
}
