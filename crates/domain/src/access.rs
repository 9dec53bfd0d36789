//! Permission pairs and the aggregated permission set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single (resource, action) grant resolved from the relation graph.
///
/// Both names come from the same identifier table; which side is the resource
/// and which is the action is fixed by the column that referenced it, so the
/// two sides are only reachable through the named accessors, never by
/// position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PermissionPair {
    resource_name: String,
    action_name: String,
}

impl PermissionPair {
    /// Creates a pair from resolved control-object names.
    #[must_use]
    pub fn new(resource_name: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            action_name: action_name.into(),
        }
    }

    /// Returns the controller/resource side of the grant.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.resource_name.as_str()
    }

    /// Returns the action/method side of the grant.
    #[must_use]
    pub fn action_name(&self) -> &str {
        self.action_name.as_str()
    }
}

/// Distinct permission pairs effective for one credential within one company
/// scope.
///
/// Aggregation is a union across every role assignment in the scope;
/// duplicate pairs contributed by different roles collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(BTreeSet<PermissionPair>);

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a pair to the set.
    pub fn insert(&mut self, pair: PermissionPair) {
        self.0.insert(pair);
    }

    /// Returns whether the set contains the exact (resource, action) pair.
    ///
    /// Matching is exact-string and case-sensitive on both names; no wildcard
    /// or hierarchy expansion is performed.
    #[must_use]
    pub fn grants(&self, resource_name: &str, action_name: &str) -> bool {
        self.0.iter().any(|pair| {
            pair.resource_name == resource_name && pair.action_name == action_name
        })
    }

    /// Returns the number of distinct pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no pair is granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PermissionPair> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PermissionPair>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{PermissionPair, PermissionSet};

    #[test]
    fn grants_requires_both_names_to_match() {
        let set: PermissionSet = [PermissionPair::new("Vehiculo", "Ver")].into_iter().collect();

        assert!(set.grants("Vehiculo", "Ver"));
        assert!(!set.grants("Vehiculo", "Editar"));
        assert!(!set.grants("Persona", "Ver"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let set: PermissionSet = [PermissionPair::new("Vehiculo", "Ver")].into_iter().collect();

        assert!(!set.grants("vehiculo", "ver"));
        assert!(!set.grants("Vehiculo", "VER"));
    }

    #[test]
    fn duplicate_pairs_from_different_roles_collapse() {
        let set: PermissionSet = [
            PermissionPair::new("Vehiculo", "Ver"),
            PermissionPair::new("Vehiculo", "Ver"),
            PermissionPair::new("Persona", "Ver"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        assert!(set.grants("Vehiculo", "Ver"));
        assert!(set.grants("Persona", "Ver"));
    }

    #[test]
    fn empty_set_grants_nothing() {
        let set = PermissionSet::new();
        assert!(set.is_empty());
        assert!(!set.grants("Vehiculo", "Ver"));
    }

    #[test]
    fn pair_sides_stay_distinct() {
        let pair = PermissionPair::new("Vehiculo", "Ver");
        assert_eq!(pair.resource_name(), "Vehiculo");
        assert_eq!(pair.action_name(), "Ver");

        let set: PermissionSet = [pair].into_iter().collect();
        assert!(!set.grants("Ver", "Vehiculo"));
    }

    proptest! {
        #[test]
        fn inserted_pair_is_always_granted(
            resource in "[A-Za-z_]{1,24}",
            action in "[A-Za-z_]{1,24}",
        ) {
            let mut set = PermissionSet::new();
            set.insert(PermissionPair::new(resource.clone(), action.clone()));
            prop_assert!(set.grants(resource.as_str(), action.as_str()));
        }

        #[test]
        fn ascii_case_variant_is_never_granted(
            resource in "[a-z]{1,24}",
            action in "[a-z]{1,24}",
        ) {
            let set: PermissionSet =
                [PermissionPair::new(resource.to_ascii_uppercase(), action.clone())]
                    .into_iter()
                    .collect();
            prop_assert!(!set.grants(resource.as_str(), action.as_str()));
        }
    }
}
