use crate::model::Resource;
use crate::policy::Rule;
use crate::value::PropertyValue;
use iacguard_types::ids;

const PUBLIC_CIDR: &str = "0.0.0.0/0";
const SSH_PORT: u16 = 22;
const RDP_PORT: u16 = 3389;

pub fn ssh_rule() -> Rule {
    Rule::new(
        ids::RULE_PROHIBIT_PUBLIC_SSH,
        "Security groups must not allow SSH (22) from the internet (0.0.0.0/0)",
        ids::KIND_EC2_SECURITY_GROUP,
        ids::CONTROL_SOC2_CC6_6,
        check_ssh,
    )
}

pub fn rdp_rule() -> Rule {
    Rule::new(
        ids::RULE_PROHIBIT_PUBLIC_RDP,
        "Security groups must not allow RDP (3389) from the internet (0.0.0.0/0)",
        ids::KIND_EC2_SECURITY_GROUP,
        ids::CONTROL_SOC2_CC6_6,
        check_rdp,
    )
}

fn check_ssh(resource: &Resource) -> Option<String> {
    exposes_publicly(resource, SSH_PORT).then(|| message(resource, "SSH", SSH_PORT))
}

fn check_rdp(resource: &Resource) -> Option<String> {
    exposes_publicly(resource, RDP_PORT).then(|| message(resource, "RDP", RDP_PORT))
}

fn message(resource: &Resource, protocol: &str, port: u16) -> String {
    format!(
        "Security group '{}' allows {} (port {}) access from the internet ({}). \
This is a security risk. Restrict access to specific IP addresses or remove this rule.",
        resource.name(),
        protocol,
        port,
        PUBLIC_CIDR
    )
}

/// Any ingress entry open to `0.0.0.0/0` whose port range covers `port`.
fn exposes_publicly(resource: &Resource, port: u16) -> bool {
    let Some(ingress) = resource.get("ingress").and_then(PropertyValue::as_sequence) else {
        return false;
    };

    ingress.iter().any(|entry| {
        let public = entry
            .get("cidrBlocks")
            .and_then(PropertyValue::as_sequence)
            .is_some_and(|cidrs| cidrs.iter().any(|c| c.as_str() == Some(PUBLIC_CIDR)));

        let from = entry.get("fromPort").and_then(PropertyValue::as_f64);
        let to = entry.get("toPort").and_then(PropertyValue::as_f64);
        let covers = match (from, to) {
            (Some(from), Some(to)) => from <= f64::from(port) && to >= f64::from(port),
            _ => false,
        };

        public && covers
    })
}
