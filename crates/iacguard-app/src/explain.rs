//! The `explain` use case: look up rule/control documentation.

use iacguard_domain::Rule;
use iacguard_domain::checks::builtin_rules;
use iacguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found {
        explanation: Explanation,
        /// Built-in rules behind the identifier: the rule itself, or every rule checking the
        /// control.
        rules: Vec<Rule>,
    },
    /// Unknown identifier; includes available rule ids and control ids.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
        available_control_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id or control id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(explanation) => ExplainOutput::Found {
            explanation,
            rules: builtin_rules()
                .into_iter()
                .filter(|r| r.id() == identifier || r.control_id() == identifier)
                .collect(),
        },
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
            available_control_ids: explain::all_control_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation, rules: &[Rule]) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    if !rules.is_empty() {
        out.push_str("Rules\n");
        out.push_str("-----\n");
        for rule in rules {
            out.push_str(&format!(
                "- {} ({}, control {}): {}\n",
                rule.id(),
                rule.target_kind(),
                rule.control_id(),
                rule.description()
            ));
        }
        out.push('\n');
    }
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (violation):\n");
    out.push_str("```python\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (fixed):\n");
    out.push_str("```python\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    rule_ids: &[&'static str],
    control_ids: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id or control id: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable control ids:\n");
    for id in control_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
