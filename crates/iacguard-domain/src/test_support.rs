use crate::checks::builtin_rule;
use crate::model::{Properties, Resource};
use crate::policy::{EffectiveConfig, FailOn, PolicyPack, Rule};
use crate::value::PropertyValue;
use iacguard_types::{EnforcementLevel, ids};

pub fn props(value: serde_json::Value) -> Properties {
    match PropertyValue::from(value) {
        PropertyValue::Mapping(map) => map,
        other => panic!("properties must be a JSON object, got {other:?}"),
    }
}

pub fn resource(kind: &str, name: &str, properties: serde_json::Value) -> Resource {
    Resource::new(kind, name, props(properties)).expect("valid test resource")
}

pub fn soc2_rules() -> Vec<Rule> {
    [
        ids::RULE_S3_ENCRYPTION_REQUIRED,
        ids::RULE_S3_OBJECT_ENCRYPTION_REQUIRED,
    ]
    .into_iter()
    .map(|id| builtin_rule(id).expect("builtin rule"))
    .collect()
}

pub fn config_with_pack(enforcement: EnforcementLevel, rules: Vec<Rule>) -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Mandatory,
        max_violations: 200,
        pack: PolicyPack::new("test-pack", enforcement, rules),
    }
}
