use crate::policy::Rule;
use iacguard_types::ids;

mod public_ingress;
mod s3_bucket_encryption;
mod s3_object_encryption;
pub(crate) mod utils;


/// Every built-in rule, in registration order.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        s3_bucket_encryption::rule(),
        s3_object_encryption::rule(),
        public_ingress::ssh_rule(),
        public_ingress::rdp_rule(),
    ]
}

pub fn builtin_rule(id: &str) -> Option<Rule> {
    match id {
        ids::RULE_S3_ENCRYPTION_REQUIRED => Some(s3_bucket_encryption::rule()),
        ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED => Some(s3_object_encryption::rule()),
        ids::RULE_PROHIBIT_PUBLIC_SSH => Some(public_ingress::ssh_rule()),
        ids::RULE_PROHIBIT_PUBLIC_RDP => Some(public_ingress::rdp_rule()),
        _ => None,
    }
}
