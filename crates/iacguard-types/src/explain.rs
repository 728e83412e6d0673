//! Explain registry for rules and controls.
//!
//! Maps rule IDs and control IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or control.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/control.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after declaration examples.
    pub examples: ExamplePair,
}

/// Before and after declaration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Declaration that would trigger a violation.
    pub before: &'static str,
    /// Declaration that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or control_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_S3_ENCRYPTION_REQUIRED => Some(explain_s3_encryption_required()),
        ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED => Some(explain_s3_object_encryption_required()),
        ids::RULE_PROHIBIT_PUBLIC_SSH => Some(explain_prohibit_public_ssh()),
        ids::RULE_PROHIBIT_PUBLIC_RDP => Some(explain_prohibit_public_rdp()),

        // Controls
        ids::CONTROL_SOC2_CC6_1 => Some(explain_cc6_1()),
        ids::CONTROL_SOC2_CC6_6 => Some(explain_cc6_6()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_S3_ENCRYPTION_REQUIRED,
        ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED,
        ids::RULE_PROHIBIT_PUBLIC_SSH,
        ids::RULE_PROHIBIT_PUBLIC_RDP,
    ]
}

/// List all known control IDs.
pub fn all_control_ids() -> &'static [&'static str] {
    &[ids::CONTROL_SOC2_CC6_1, ids::CONTROL_SOC2_CC6_6]
}

// --- Rule-level explanations ---

fn explain_s3_encryption_required() -> Explanation {
    Explanation {
        title: "S3 Bucket Encryption Required",
        description: "\
Detects S3 buckets declared without server-side encryption.

A bucket is flagged when either:
- `serverSideEncryptionConfiguration` is missing or empty
- the configuration is present but defines no encryption `rules`

Both cases are reported with the same message: the bucket does not declare
encryption at rest. This maps to SOC2 CC6.1 (Logical and Physical Access Controls).",
        remediation: "\
Declare a server-side encryption configuration with at least one rule:
- Use `AES256` for S3-managed keys
- Use `aws:kms` with a customer-managed key for key rotation and audit trails",
        examples: ExamplePair {
            before: r#"bucket = s3.Bucket('temp-bucket',
    bucket='neo-temp-bucket-ca')"#,
            after: r#"bucket = s3.Bucket('logs-bucket',
    bucket='neo-logs-bucket-ca',
    server_side_encryption_configuration=s3.BucketServerSideEncryptionConfigurationArgs(
        rule=s3.BucketServerSideEncryptionConfigurationRuleArgs(
            apply_server_side_encryption_by_default=s3.BucketServerSideEncryptionConfigurationRuleApplyServerSideEncryptionByDefaultArgs(
                sse_algorithm="AES256"))))"#,
        },
    }
}

fn explain_s3_object_encryption_required() -> Explanation {
    Explanation {
        title: "S3 Object Encryption Required",
        description: "\
Detects S3 bucket objects declared without `serverSideEncryption`.

The rule inspects each object on its own. It does not look at the bucket the
object is stored in: an object inside an encrypted bucket is still flagged
when it does not declare its own encryption, and objects are never flagged
because their bucket is unencrypted.",
        remediation: "\
Set `server_side_encryption` on every object:
- `AES256` for S3-managed keys
- `aws:kms` together with `kms_key_id` for customer-managed keys",
        examples: ExamplePair {
            before: r#"s3.BucketObject('temp-data',
    bucket=temp_bucket.id,
    key='temp/processing-data.json')"#,
            after: r#"s3.BucketObject('temp-data',
    bucket=temp_bucket.id,
    key='temp/processing-data.json',
    server_side_encryption='AES256')"#,
        },
    }
}

fn explain_prohibit_public_ssh() -> Explanation {
    Explanation {
        title: "No Public SSH Ingress",
        description: "\
Detects security groups with an ingress rule that opens port 22 to 0.0.0.0/0.

A rule counts when its `cidrBlocks` contain `0.0.0.0/0` and its
`fromPort`..`toPort` range includes 22. Exposing SSH to the internet invites
credential stuffing and brute force attempts.",
        remediation: "\
Restrict the ingress rule to known CIDR ranges, or remove it and use a
bastion host or SSM Session Manager for administrative access.",
        examples: ExamplePair {
            before: r#"ingress=[{"protocol": "tcp", "from_port": 22, "to_port": 22,
          "cidr_blocks": ["0.0.0.0/0"]}]"#,
            after: r#"ingress=[{"protocol": "tcp", "from_port": 22, "to_port": 22,
          "cidr_blocks": ["10.0.0.0/16"]}]"#,
        },
    }
}

fn explain_prohibit_public_rdp() -> Explanation {
    Explanation {
        title: "No Public RDP Ingress",
        description: "\
Detects security groups with an ingress rule that opens port 3389 to 0.0.0.0/0.

A rule counts when its `cidrBlocks` contain `0.0.0.0/0` and its
`fromPort`..`toPort` range includes 3389.",
        remediation: "\
Restrict the ingress rule to known CIDR ranges, or put remote desktop access
behind a VPN.",
        examples: ExamplePair {
            before: r#"ingress=[{"protocol": "tcp", "from_port": 0, "to_port": 65535,
          "cidr_blocks": ["0.0.0.0/0"]}]"#,
            after: r#"ingress=[{"protocol": "tcp", "from_port": 443, "to_port": 443,
          "cidr_blocks": ["0.0.0.0/0"]}]"#,
        },
    }
}

// --- Control-level explanations ---

fn explain_cc6_1() -> Explanation {
    let mut exp = explain_s3_encryption_required();
    exp.title = "SOC2 CC6.1 - Logical and Physical Access Controls";
    exp
}

fn explain_cc6_6() -> Explanation {
    let mut exp = explain_prohibit_public_ssh();
    exp.title = "SOC2 CC6.6 - Boundary Protection Against External Threats";
    exp
}
