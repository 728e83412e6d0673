//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Evaluation determinism and ordering
//! - Kind filtering and resource attribution of violations
//! - Total navigation over arbitrarily shaped properties

use crate::checks::builtin_rules;
use crate::engine::{evaluate, evaluate_parallel};
use crate::model::{Properties, Resource};
use crate::policy::Rule;
use crate::value::{PropertyPath, PropertyValue};
use iacguard_types::ids;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Property keys biased towards the ones built-in rules read.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("serverSideEncryptionConfiguration".to_string()),
        Just("serverSideEncryption".to_string()),
        Just("rules".to_string()),
        Just("ingress".to_string()),
        Just("cidrBlocks".to_string()),
        Just("fromPort".to_string()),
        Just("toPort".to_string()),
        Just("0".to_string()),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,11}").unwrap(),
    ]
}

fn arb_property_value() -> impl Strategy<Value = PropertyValue> {
    let leaf = prop_oneof![
        Just(PropertyValue::Null),
        any::<bool>().prop_map(PropertyValue::Bool),
        prop_oneof![Just(0i32), Just(22i32), Just(3389i32), any::<i32>()]
            .prop_map(|n| PropertyValue::Number(n.into())),
        prop_oneof![
            Just("0.0.0.0/0".to_string()),
            Just("AES256".to_string()),
            Just(String::new()),
            prop::string::string_regex("[a-z0-9:/._-]{0,12}").unwrap(),
        ]
        .prop_map(PropertyValue::String),
    ];

    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(PropertyValue::Sequence),
            prop::collection::btree_map(arb_key(), inner, 0..4).prop_map(PropertyValue::Mapping),
        ]
    })
}

fn arb_properties() -> impl Strategy<Value = Properties> {
    prop::collection::btree_map(arb_key(), arb_property_value(), 0..5)
}

fn arb_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(ids::KIND_S3_BUCKET.to_string()),
        Just(ids::KIND_S3_BUCKET_OBJECT.to_string()),
        Just(ids::KIND_EC2_SECURITY_GROUP.to_string()),
        Just("aws:ebs/volume:Volume".to_string()),
        Just("aws:ec2/vpc:Vpc".to_string()),
    ]
}

/// Resources with unique names (`r-<index>`) so violations can be traced back.
fn arb_resources() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec((arb_kind(), arb_properties()), 0..16).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (kind, properties))| {
                Resource::new(kind, format!("r-{i}"), properties).expect("non-empty kind and name")
            })
            .collect()
    })
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 0..5)
}

fn index_of(name: &str) -> usize {
    name.trim_start_matches("r-").parse().expect("generated name")
}

fn flag_everything(_: &Resource) -> Option<String> {
    Some("flagged".to_string())
}

// ============================================================================
// Property tests: evaluation
// ============================================================================

proptest! {
    /// Same input, same ordered output.
    #[test]
    fn evaluation_is_deterministic(resources in arb_resources()) {
        let rules = builtin_rules();
        let first = evaluate(&resources, &rules);
        let second = evaluate(&resources, &rules);
        prop_assert_eq!(first, second);
    }

    /// Violations never go backwards in resource order.
    #[test]
    fn violations_follow_resource_order(resources in arb_resources()) {
        let out = evaluate(&resources, &builtin_rules());
        let indexes: Vec<usize> = out.iter().map(|v| index_of(&v.resource_name)).collect();
        prop_assert!(
            indexes.windows(2).all(|w| w[0] <= w[1]),
            "violations out of resource order: {:?}",
            indexes
        );
    }

    /// Within one resource, violations follow rule registration order.
    #[test]
    fn violations_follow_rule_order_within_resource(resources in arb_resources()) {
        let rules = builtin_rules();
        let position = |rule_id: &str| rules.iter().position(|r| r.id() == rule_id).unwrap();

        let out = evaluate(&resources, &rules);
        for pair in out.windows(2) {
            if pair[0].resource_name == pair[1].resource_name {
                prop_assert!(position(&pair[0].rule_id) < position(&pair[1].rule_id));
            }
        }
    }

    /// Every violation names the resource that produced it.
    #[test]
    fn no_cross_resource_leakage(resources in arb_resources()) {
        for v in evaluate(&resources, &builtin_rules()) {
            let source = &resources[index_of(&v.resource_name)];
            prop_assert_eq!(v.resource_name.as_str(), source.name());
            prop_assert_eq!(v.resource_kind.as_str(), source.kind());
        }
    }

    /// A rule fires only on its target kind, even with a predicate that always matches.
    #[test]
    fn rules_only_fire_on_target_kind(resources in arb_resources()) {
        let rule = Rule::new("flag-buckets", "d", ids::KIND_S3_BUCKET, "CC6.1", flag_everything);
        let out = evaluate(&resources, &[rule]);

        let buckets = resources.iter().filter(|r| r.kind() == ids::KIND_S3_BUCKET).count();
        prop_assert_eq!(out.len(), buckets);
        prop_assert!(out.iter().all(|v| v.resource_kind == ids::KIND_S3_BUCKET));
    }

    /// Partitioned evaluation produces the sequential report.
    #[test]
    fn parallel_evaluation_matches_sequential(resources in arb_resources()) {
        let rules = builtin_rules();
        prop_assert_eq!(evaluate_parallel(&resources, &rules), evaluate(&resources, &rules));
    }

    /// A resource of a built-in kind with no properties is still evaluated without panicking,
    /// and encryption rules report it.
    #[test]
    fn empty_properties_are_evaluated(kind in arb_kind()) {
        let r = Resource::new(kind.clone(), "bare", Properties::new()).unwrap();
        let out = evaluate(&[r], &builtin_rules());
        let expected = usize::from(kind == ids::KIND_S3_BUCKET || kind == ids::KIND_S3_BUCKET_OBJECT);
        prop_assert_eq!(out.len(), expected);
    }

    /// Navigation is total: any path over any value returns, never panics.
    #[test]
    fn get_is_total(value in arb_property_value(), path in arb_path()) {
        let path = PropertyPath::from(path);
        let found = value.get(&path);
        if path.is_empty() {
            prop_assert!(found.is_none());
        }
    }
}
