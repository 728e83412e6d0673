use crate::{RenderableEnforcement, RenderableReport};

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={rule_id}::{message}`
///
/// Mandatory violations become errors, advisory ones warnings. Resources have no file location,
/// so the resource is named in the message instead.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for v in &report.violations {
        let level = match v.enforcement {
            RenderableEnforcement::Mandatory => "error",
            RenderableEnforcement::Advisory => "warning",
        };

        let message = escape_data(&format!(
            "[{}] {} ({}): {}",
            v.control_id, v.resource_name, v.resource_kind, v.message
        ));
        out.push(format!(
            "::{} title={}::{}",
            level,
            escape_property(&v.rule_id),
            message
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, violation};
    use crate::RenderableVerdictStatus;

    #[test]
    fn levels_follow_enforcement() {
        let out = render_github_annotations(&report(
            RenderableVerdictStatus::Fail,
            vec![
                violation("a", RenderableEnforcement::Mandatory),
                violation("b", RenderableEnforcement::Advisory),
            ],
        ));

        assert_eq!(
            out,
            vec![
                "::error title=s3-encryption-required::[CC6.1] a (aws:s3/bucket:Bucket): \
                 S3 bucket must have server-side encryption enabled"
                    .to_string(),
                "::warning title=s3-encryption-required::[CC6.1] b (aws:s3/bucket:Bucket): \
                 S3 bucket must have server-side encryption enabled"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn escapes_workflow_command_characters() {
        let mut v = violation("x", RenderableEnforcement::Mandatory);
        v.message = "100%\nencrypted".to_string();
        v.rule_id = "a:b,c".to_string();

        let out = render_github_annotations(&report(RenderableVerdictStatus::Fail, vec![v]));
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("::error title=a%3Ab%2Cc::"));
        assert!(out[0].ends_with("100%25%0Aencrypted"));
    }

    #[test]
    fn empty_report_has_no_annotations() {
        assert!(render_github_annotations(&report(RenderableVerdictStatus::Pass, Vec::new())).is_empty());
    }
}
