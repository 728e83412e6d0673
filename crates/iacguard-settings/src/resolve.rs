use crate::model::IacguardConfigV1;
use crate::presets::{self, DEFAULT_MAX_VIOLATIONS, DEFAULT_PROFILE};
use anyhow::Context;
use iacguard_domain::checks::builtin_rules;
use iacguard_domain::{EffectiveConfig, FailOn, PolicyPack, Rule};
use iacguard_types::EnforcementLevel;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub enforcement: Option<String>,
    pub fail_on: Option<String>,
    pub max_violations: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: IacguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let preset = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    let enforcement = match overrides.enforcement.as_deref().or(cfg.enforcement.as_deref()) {
        Some(s) => parse_enforcement(s).context("invalid pack enforcement")?,
        None => preset.enforcement,
    };

    let fail_on = match overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        Some(s) => parse_fail_on(s)?,
        None => preset.fail_on,
    };

    let max_violations = overrides
        .max_violations
        .or(cfg.max_violations)
        .map(|mf| mf as usize)
        .unwrap_or(DEFAULT_MAX_VIOLATIONS);

    let mut enabled: BTreeSet<&str> = preset.rule_ids.iter().copied().collect();
    let builtins = builtin_rules();

    // Every `[rules.<id>]` entry is validated, enabled or not.
    let mut configured: BTreeMap<&str, Rule> = BTreeMap::new();
    for (rule_id, rc) in cfg.rules.iter() {
        let Some(builtin) = builtins.iter().find(|r| r.id() == rule_id.as_str()) else {
            anyhow::bail!("unknown rule in config: {rule_id}");
        };
        match rc.enabled {
            Some(true) => {
                enabled.insert(rule_id.as_str());
            }
            Some(false) => {
                enabled.remove(rule_id.as_str());
            }
            None => {}
        }

        let mut rule = builtin.clone();
        if let Some(level) = rc.enforcement.as_deref() {
            let level = parse_enforcement(level)
                .with_context(|| format!("invalid enforcement for {rule_id}"))?;
            rule = rule.with_enforcement(level);
        }
        if !rc.allow.is_empty() {
            rule = rule.with_allowlist(&rc.allow)?;
        }
        configured.insert(rule_id.as_str(), rule);
    }

    // Registration order of the built-ins is the evaluation order.
    let rules: Vec<Rule> = builtins
        .iter()
        .filter(|r| enabled.contains(r.id()))
        .map(|r| configured.remove(r.id()).unwrap_or_else(|| r.clone()))
        .collect();

    let pack_name = cfg.name.clone().unwrap_or_else(|| preset.pack_name.to_string());

    Ok(ResolvedConfig {
        effective: EffectiveConfig {
            profile: preset.profile.to_string(),
            fail_on,
            max_violations,
            pack: PolicyPack::new(pack_name, enforcement, rules),
        },
    })
}

fn parse_enforcement(v: &str) -> anyhow::Result<EnforcementLevel> {
    match v {
        "advisory" => Ok(EnforcementLevel::Advisory),
        "mandatory" => Ok(EnforcementLevel::Mandatory),
        other => anyhow::bail!("unknown enforcement level: {other} (expected advisory|mandatory)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "never" => Ok(FailOn::Never),
        "mandatory" => Ok(FailOn::Mandatory),
        "any" => Ok(FailOn::Any),
        other => anyhow::bail!("unknown fail_on: {other} (expected never|mandatory|any)"),
    }
}
