use iacguard_domain::PolicyPack;

/// One line per rule in evaluation order: id, control, enforcement, target kind, description.
pub fn format_rules(pack: &PolicyPack) -> String {
    let mut out = format!(
        "{} ({} rules, {})\n",
        pack.name(),
        pack.rules().len(),
        pack.enforcement()
    );
    for rule in pack.rules() {
        let level = rule.effective_enforcement(pack.enforcement());
        out.push_str(&format!(
            "  {:<32} {:<6} {:<9} {:<36} {}\n",
            rule.id(),
            rule.control_id(),
            level.as_str(),
            rule.target_kind(),
            rule.description()
        ));
        if !rule.allow_patterns().is_empty() {
            out.push_str(&format!("    allow: {}\n", rule.allow_patterns().join(", ")));
        }
    }
    out
}
