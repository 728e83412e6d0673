use iacguard_domain::FailOn;
use iacguard_types::{EnforcementLevel, ids};

/// Known preset profiles.
pub const PROFILES: &[&str] = &["soc2", "aws-security", "all"];

pub const DEFAULT_PROFILE: &str = "soc2";
pub const DEFAULT_MAX_VIOLATIONS: usize = 200;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
#[derive(Clone, Debug)]
pub struct Preset {
    pub profile: &'static str,
    pub pack_name: &'static str,
    pub enforcement: EnforcementLevel,
    pub fail_on: FailOn,
    pub rule_ids: &'static [&'static str],
}

pub fn preset(profile: &str) -> Option<Preset> {
    match profile {
        "soc2" => Some(soc2_profile()),
        "aws-security" => Some(aws_security_profile()),
        "all" => Some(all_profile()),
        _ => None,
    }
}

fn soc2_profile() -> Preset {
    Preset {
        profile: "soc2",
        pack_name: "soc2-compliance",
        enforcement: EnforcementLevel::Mandatory,
        fail_on: FailOn::Mandatory,
        rule_ids: &[
            ids::RULE_S3_ENCRYPTION_REQUIRED,
            ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED,
        ],
    }
}

fn aws_security_profile() -> Preset {
    Preset {
        profile: "aws-security",
        pack_name: "aws-security-policies",
        enforcement: EnforcementLevel::Mandatory,
        fail_on: FailOn::Mandatory,
        rule_ids: &[ids::RULE_PROHIBIT_PUBLIC_SSH, ids::RULE_PROHIBIT_PUBLIC_RDP],
    }
}

fn all_profile() -> Preset {
    Preset {
        profile: "all",
        pack_name: "iacguard-all",
        enforcement: EnforcementLevel::Mandatory,
        fail_on: FailOn::Mandatory,
        rule_ids: iacguard_types::explain::all_rule_ids(),
    }
}
