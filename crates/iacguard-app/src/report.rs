use anyhow::Context;
use iacguard_render::{
    RenderableData, RenderableEnforcement, RenderableReport, RenderableVerdictStatus,
    RenderableViolation,
};
use iacguard_types::{
    EnforcementLevel, IacguardData, IacguardReport, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1,
    ToolMeta, Verdict, VerdictCounts, VerdictStatus, Violation, ids,
};
use time::OffsetDateTime;

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "iacguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<IacguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse iacguard report")
}

pub fn serialize_report(report: &IacguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &IacguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict.status {
            VerdictStatus::Pass => RenderableVerdictStatus::Pass,
            VerdictStatus::Warn => RenderableVerdictStatus::Warn,
            VerdictStatus::Fail => RenderableVerdictStatus::Fail,
        },
        violations: report.violations.iter().map(renderable_violation).collect(),
        data: RenderableData {
            pack: report.data.pack.clone(),
            violations_emitted: report.data.violations_emitted,
            violations_total: report.data.violations_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_violation(v: &Violation) -> RenderableViolation {
    RenderableViolation {
        resource_name: v.resource_name.clone(),
        resource_kind: v.resource_kind.clone(),
        message: v.message.clone(),
        control_id: v.control_id.clone(),
        rule_id: v.rule_id.clone(),
        enforcement: match v.enforcement {
            EnforcementLevel::Advisory => RenderableEnforcement::Advisory,
            EnforcementLevel::Mandatory => RenderableEnforcement::Mandatory,
        },
    }
}

/// A failing report recording a run that aborted before evaluation.
pub fn runtime_error_report(message: &str) -> IacguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        verdict: Verdict {
            status: VerdictStatus::Fail,
            counts: VerdictCounts::default(),
            reasons: vec![ids::REASON_RUNTIME_ERROR.to_string()],
        },
        violations: Vec::new(),
        data: IacguardData {
            pack: "unknown".to_string(),
            profile: "unknown".to_string(),
            error: Some(message.to_string()),
            ..IacguardData::default()
        },
    }
}
