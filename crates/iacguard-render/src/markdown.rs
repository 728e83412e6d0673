use crate::{RenderableEnforcement, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# iacguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Pack: `{}`\n- Verdict: **{}**\n- Violations: {} (emitted) / {} (total)\n\n",
        report.data.pack, verdict, report.data.violations_emitted, report.data.violations_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.data.violations_total == 0 {
        out.push_str("No compliance violations.\n");
        return out;
    }
    if report.violations.is_empty() {
        return out;
    }

    out.push_str("## Violations\n\n");
    out.push_str("| # | Enforcement | Resource | Type | Control | Rule | Message |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");

    for (i, v) in report.violations.iter().enumerate() {
        let level = match v.enforcement {
            RenderableEnforcement::Mandatory => "MANDATORY",
            RenderableEnforcement::Advisory => "ADVISORY",
        };
        out.push_str(&format!(
            "| {} | {} | `{}` | `{}` | {} | `{}` | {} |\n",
            i + 1,
            level,
            escape_cell(&v.resource_name),
            escape_cell(&v.resource_kind),
            escape_cell(&v.control_id),
            escape_cell(&v.rule_id),
            escape_cell(&v.message)
        ));
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
