//! The `check` use case: load a snapshot, evaluate the resolved pack, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use iacguard_domain::FailOn;
use iacguard_settings::{IacguardConfigV1, Overrides, ResolvedConfig};
use iacguard_types::{IacguardReport, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, VerdictStatus};
use time::OffsetDateTime;

use crate::report::tool_meta;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Snapshot file or directory of snapshot files.
    pub snapshot_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: IacguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse config text (empty means defaults) and resolve it against the overrides.
pub fn resolve_settings(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        IacguardConfigV1::default()
    } else {
        iacguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    iacguard_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the check use case: resolve config, load the snapshot, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_settings(input.config_text, input.overrides.clone())?;
    let resources =
        iacguard_snapshot::load_snapshot(input.snapshot_path).context("load snapshot")?;

    let effective = &resolved.effective;
    tracing::debug!(
        resources = resources.len(),
        rules = effective.pack.rules().len(),
        pack = effective.pack.name(),
        "evaluating"
    );

    let domain_report = iacguard_domain::evaluate_config(&resources, effective);
    if let Some(reason) = &domain_report.data.truncated_reason {
        tracing::warn!(
            total = domain_report.data.violations_total,
            emitted = domain_report.data.violations_emitted,
            "{reason}"
        );
    }

    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;

    tracing::info!(
        status = ?domain_report.verdict.status,
        violations = domain_report.data.violations_total,
        duration_ms,
        "check complete"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at,
            ended_at: Some(ended_at),
            duration_ms: Some(duration_ms),
        },
        verdict: domain_report.verdict,
        violations: domain_report.violations,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a report to an exit code under `fail_on`: 0 = ok, 2 = policy failure.
pub fn exit_code(report: &IacguardReport, fail_on: FailOn) -> i32 {
    let counts = &report.verdict.counts;
    let failed = match fail_on {
        FailOn::Never => false,
        FailOn::Mandatory => report.verdict.status == VerdictStatus::Fail,
        FailOn::Any => counts.advisory + counts.mandatory > 0,
    };
    if failed { 2 } else { 0 }
}
