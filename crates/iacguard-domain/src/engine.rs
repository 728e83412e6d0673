use crate::fingerprint::fingerprint_for_violation;
use crate::model::Resource;
use crate::policy::{EffectiveConfig, PolicyPack, Rule};
use crate::report::{DomainReport, counts_for, verdict_status};
use iacguard_types::{EnforcementLevel, IacguardData, Verdict, Violation, ids};
use rayon::prelude::*;

/// Enforcement applied to rules evaluated outside of a pack.
const DEFAULT_ENFORCEMENT: EnforcementLevel = EnforcementLevel::Advisory;

/// Apply every rule whose `target_kind` matches to every resource.
///
/// Output order is the report ordering contract: resources in input order, then rules in
/// registration order. Never grouped by rule, never sorted.
pub fn evaluate(resources: &[Resource], rules: &[Rule]) -> Vec<Violation> {
    let mut out = Vec::new();
    for resource in resources {
        evaluate_resource(resource, rules, DEFAULT_ENFORCEMENT, &mut out);
    }
    out
}

/// Same output as [`evaluate`], with the resource loop partitioned across the rayon pool.
pub fn evaluate_parallel(resources: &[Resource], rules: &[Rule]) -> Vec<Violation> {
    resources
        .par_iter()
        .map(|resource| {
            let mut out = Vec::new();
            evaluate_resource(resource, rules, DEFAULT_ENFORCEMENT, &mut out);
            out
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Evaluate a pack's rules, resolving each rule's enforcement against the pack level.
pub fn evaluate_pack(resources: &[Resource], pack: &PolicyPack) -> Vec<Violation> {
    let mut out = Vec::new();
    for resource in resources {
        evaluate_resource(resource, pack.rules(), pack.enforcement(), &mut out);
    }
    out
}

/// Evaluate and summarize: verdict, counts, truncation.
///
/// The verdict and counts cover every violation found, including ones dropped by
/// `max_violations`.
pub fn evaluate_config(resources: &[Resource], cfg: &EffectiveConfig) -> DomainReport {
    let violations = evaluate_pack(resources, &cfg.pack);

    let counts = counts_for(&violations);
    let status = verdict_status(&counts);
    let total = violations.len() as u32;

    let mut emitted = violations;
    let mut truncated_reason: Option<String> = None;
    let mut reasons = Vec::new();
    if emitted.len() > cfg.max_violations {
        emitted.truncate(cfg.max_violations);
        truncated_reason = Some(format!(
            "violations truncated to max_violations={}",
            cfg.max_violations
        ));
        reasons.push(ids::REASON_TRUNCATED.to_string());
    }

    let data = IacguardData {
        pack: cfg.pack.name().to_string(),
        profile: cfg.profile.clone(),
        enforcement: Some(cfg.pack.enforcement()),
        resources_scanned: resources.len() as u32,
        rules_evaluated: cfg.pack.rules().len() as u32,
        violations_total: total,
        violations_emitted: emitted.len() as u32,
        truncated_reason,
        error: None,
    };

    DomainReport {
        verdict: Verdict {
            status,
            counts,
            reasons,
        },
        violations: emitted,
        data,
    }
}

fn evaluate_resource(
    resource: &Resource,
    rules: &[Rule],
    default_level: EnforcementLevel,
    out: &mut Vec<Violation>,
) {
    for rule in rules.iter().filter(|r| r.applies_to(resource)) {
        let Some(message) = rule.check(resource) else {
            continue;
        };
        out.push(Violation {
            resource_name: resource.name().to_string(),
            resource_kind: resource.kind().to_string(),
            message,
            control_id: rule.control_id().to_string(),
            rule_id: rule.id().to_string(),
            enforcement: rule.effective_enforcement(default_level),
            fingerprint: fingerprint_for_violation(rule.id(), resource.kind(), resource.name()),
        });
    }
}
