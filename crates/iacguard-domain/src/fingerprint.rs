use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - rule_id
/// - resource kind
/// - resource name
pub fn fingerprint_for_violation(rule_id: &str, resource_kind: &str, resource_name: &str) -> String {
    let canonical = [rule_id, resource_kind, resource_name].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
