use crate::model::Resource;
use crate::policy::Rule;
use crate::value::PropertyValue;
use iacguard_types::ids;

pub const MESSAGE: &str = "SOC2 Violation: S3 objects should use server-side encryption. \
This ensures data at rest is encrypted per SOC2 CC6.1 requirements.";

pub fn rule() -> Rule {
    Rule::new(
        ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED,
        "S3 objects should use server-side encryption",
        ids::KIND_S3_BUCKET_OBJECT,
        ids::CONTROL_SOC2_CC6_1,
        check,
    )
}

// Looks at the object alone; the containing bucket's encryption is not consulted.
fn check(resource: &Resource) -> Option<String> {
    let encrypted = resource
        .get("serverSideEncryption")
        .is_some_and(PropertyValue::is_truthy);

    (!encrypted).then(|| MESSAGE.to_string())
}
