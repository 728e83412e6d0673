use crate::RenderableReport;

/// Terminal report: a one-line summary, then each violation in evaluation order.
pub fn render_text(report: &RenderableReport) -> String {
    // Counts come from the evaluator, not the emitted list, which may be truncated.
    if report.data.violations_total == 0 {
        return "✅ No compliance violations found!\n".to_string();
    }

    let mut out = format!(
        "🚨 Found {} compliance violations:\n\n",
        report.data.violations_total
    );

    for (i, v) in report.violations.iter().enumerate() {
        out.push_str(&format!("{}. Resource: {}\n", i + 1, v.resource_name));
        out.push_str(&format!("   Type: {}\n", v.resource_kind));
        out.push_str(&format!("   Violation: {}\n", v.message));
        out.push_str(&format!("   Control: {}\n", v.control_id));
        out.push('\n');
    }

    if let Some(reason) = &report.data.truncated_reason {
        out.push_str(&format!(
            "Showing {} of {} violations ({}).\n",
            report.data.violations_emitted, report.data.violations_total, reason
        ));
    }

    out
}
