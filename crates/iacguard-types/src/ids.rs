//! Stable identifiers for rules, controls, and resource kinds.
//!
//! `rule_id` is a kebab-case policy name. `control_id` is the compliance framework control the
//! rule maps to. Resource kinds are provider type tokens, matched exactly.

// Resource kinds
pub const KIND_S3_BUCKET: &str = "aws:s3/bucket:Bucket";
pub const KIND_S3_BUCKET_OBJECT: &str = "aws:s3/bucketObject:BucketObject";
pub const KIND_EC2_SECURITY_GROUP: &str = "aws:ec2/securityGroup:SecurityGroup";

// Rules
pub const RULE_S3_ENCRYPTION_REQUIRED: &str = "s3-encryption-required";
pub const RULE_S3_OBJECT_ENCRYPTION_REQUIRED: &str = "s3-object-encryption-required";
pub const RULE_PROHIBIT_PUBLIC_SSH: &str = "prohibit-public-ssh";
pub const RULE_PROHIBIT_PUBLIC_RDP: &str = "prohibit-public-rdp";

// Controls (SOC2 trust services criteria)
pub const CONTROL_SOC2_CC6_1: &str = "CC6.1";
pub const CONTROL_SOC2_CC6_6: &str = "CC6.6";

// Verdict reasons
pub const REASON_RUNTIME_ERROR: &str = "runtime_error";
pub const REASON_TRUNCATED: &str = "truncated";
