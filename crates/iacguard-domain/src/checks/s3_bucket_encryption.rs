use crate::model::Resource;
use crate::policy::Rule;
use crate::value::PropertyValue;
use iacguard_types::ids;

pub const MESSAGE: &str = "SOC2 Violation: S3 buckets must have server-side encryption enabled. \
This is required for SOC2 CC6.1 (Logical and Physical Access Controls) compliance.";

pub fn rule() -> Rule {
    Rule::new(
        ids::RULE_S3_ENCRYPTION_REQUIRED,
        "S3 buckets must have server-side encryption enabled",
        ids::KIND_S3_BUCKET,
        ids::CONTROL_SOC2_CC6_1,
        check,
    )
}

fn check(resource: &Resource) -> Option<String> {
    let unencrypted = match resource.get("serverSideEncryptionConfiguration") {
        Some(config) if config.is_truthy() => match config {
            // A configuration block with no rules encrypts nothing.
            PropertyValue::Mapping(_) => !config.get("rules").is_some_and(PropertyValue::is_truthy),
            _ => false,
        },
        _ => true,
    };

    unencrypted.then(|| MESSAGE.to_string())
}
