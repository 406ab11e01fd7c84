//! Deterministic dashboard uid derivation.
//!
//! A dashboard payload without an explicit `uid` gets one derived from its
//! owning resource's identity, so create, update and delete all address the
//! same Grafana dashboard across process restarts.

use uuid::Uuid;

/// Fixed namespace for uid derivation. Changing this would orphan every
/// dashboard created by earlier versions of the loader.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x8e6c_9f2c_f3a9_4b1e_9d40_c1a5_b7e2_5c11);

/// Derive the stable dashboard uid for a resource identity.
///
/// UUIDv5 over `"{namespace}/{name}"`: deterministic, and distinct inputs
/// yield distinct outputs with overwhelming probability. Rendered in simple
/// form (32 hex chars), which fits Grafana's 40-character uid limit.
pub fn derive_uid(name: &str, namespace: &str) -> String {
    let identity = format!("{}/{}", namespace, name);
    Uuid::new_v5(&UID_NAMESPACE, identity.as_bytes())
        .simple()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derivation_is_deterministic() {
        let a = derive_uid("acme-grafana-dashboard", "ns1");
        let b = derive_uid("acme-grafana-dashboard", "ns1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_identities_get_distinct_uids() {
        let corpus = [
            ("acme-grafana-dashboard", "ns1"),
            ("acme-grafana-dashboard", "ns2"),
            ("other-grafana-dashboard", "ns1"),
            ("a/b", "c"),
            ("a", "b/c"),
            ("grafana-dashboard-cluster", "open-cluster-management"),
        ];
        let uids: HashSet<_> = corpus
            .iter()
            .map(|(name, ns)| derive_uid(name, ns))
            .collect();
        assert_eq!(uids.len(), corpus.len());
    }

    #[test]
    fn test_uid_shape() {
        let uid = derive_uid("acme-grafana-dashboard", "ns1");
        assert_eq!(uid.len(), 32);
        assert!(uid.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
