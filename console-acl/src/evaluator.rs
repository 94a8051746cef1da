//! Membership evaluation
//!
//! Pure predicates over externally supplied permission/role sets. There are
//! exactly two outcomes, authorized and not authorized: absent input degrades
//! to not authorized, never to an error.

use serde::{Deserialize, Serialize};
use shared::permissions::Permission;
use std::collections::HashSet;
use std::hash::Hash;

/// The permissions granted to a session
///
/// Order-irrelevant, unique. Replaced wholesale on login/logout/refresh;
/// consumers read it, they never mutate it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(HashSet<Permission>);

impl PermissionSet {
    /// The empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole catalog
    pub fn full() -> Self {
        Permission::ALL.iter().copied().collect()
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[Permission]> for PermissionSet {
    fn from(permissions: &[Permission]) -> Self {
        permissions.iter().copied().collect()
    }
}

/// The role names granted to a session
///
/// Same shape as [`PermissionSet`], different vocabulary: role names are
/// operator-defined strings, not catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(HashSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.as_str())
    }
}

impl FromIterator<String> for RoleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for RoleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(|r| r.to_string()).collect())
    }
}

/// What a protected region demands: one identifier, or any one of a list
///
/// The list form has OR semantics; checking order is irrelevant to the
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement<T> {
    One(T),
    AnyOf(Vec<T>),
}

pub type PermissionRequirement = Requirement<Permission>;
pub type RoleRequirement = Requirement<String>;

impl<T: Eq + Hash> Requirement<T> {
    fn satisfied_by(&self, granted: &HashSet<T>) -> bool {
        match self {
            Requirement::One(required) => granted.contains(required),
            Requirement::AnyOf(required) => required.iter().any(|r| granted.contains(r)),
        }
    }
}

impl From<Permission> for PermissionRequirement {
    fn from(permission: Permission) -> Self {
        Requirement::One(permission)
    }
}

impl From<Vec<Permission>> for PermissionRequirement {
    fn from(permissions: Vec<Permission>) -> Self {
        Requirement::AnyOf(permissions)
    }
}

impl From<&[Permission]> for PermissionRequirement {
    fn from(permissions: &[Permission]) -> Self {
        Requirement::AnyOf(permissions.to_vec())
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionRequirement {
    fn from(permissions: [Permission; N]) -> Self {
        Requirement::AnyOf(permissions.to_vec())
    }
}

impl From<&str> for RoleRequirement {
    fn from(role: &str) -> Self {
        Requirement::One(role.to_string())
    }
}

impl From<String> for RoleRequirement {
    fn from(role: String) -> Self {
        Requirement::One(role)
    }
}

impl From<Vec<String>> for RoleRequirement {
    fn from(roles: Vec<String>) -> Self {
        Requirement::AnyOf(roles)
    }
}

impl From<&[&str]> for RoleRequirement {
    fn from(roles: &[&str]) -> Self {
        Requirement::AnyOf(roles.iter().map(|r| r.to_string()).collect())
    }
}

/// Test whether a granted permission set satisfies a requirement
///
/// An absent set is never authorized, regardless of the requirement shape.
pub fn authorize(granted: Option<&PermissionSet>, requirement: &PermissionRequirement) -> bool {
    match granted {
        None => false,
        Some(set) => requirement.satisfied_by(&set.0),
    }
}

/// Test whether a granted role set satisfies a role requirement
///
/// Identical contract to [`authorize`], independent data.
pub fn authorize_role(granted: Option<&RoleSet>, requirement: &RoleRequirement) -> bool {
    match granted {
        None => false,
        Some(set) => requirement.satisfied_by(&set.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(permissions: &[Permission]) -> PermissionSet {
        PermissionSet::from(permissions)
    }

    #[test]
    fn test_member_is_authorized() {
        let granted = set(&[Permission::OrdersView, Permission::OrdersCreate]);
        for permission in granted.iter() {
            assert!(authorize(Some(&granted), &permission.into()));
        }
    }

    #[test]
    fn test_non_member_is_not_authorized() {
        let granted = set(&[Permission::OrdersView]);
        assert!(!authorize(Some(&granted), &Permission::OrdersCreate.into()));
        assert!(!authorize(Some(&granted), &Permission::SuppliersView.into()));
    }

    #[test]
    fn test_empty_set_authorizes_nothing() {
        let granted = PermissionSet::new();
        for permission in Permission::ALL {
            assert!(!authorize(Some(&granted), &(*permission).into()));
        }
    }

    #[test]
    fn test_absent_set_is_never_authorized() {
        assert!(!authorize(None, &Permission::OrdersView.into()));
        assert!(!authorize(
            None,
            &vec![Permission::OrdersView, Permission::OrdersCreate].into()
        ));
        assert!(!authorize(None, &Requirement::AnyOf(vec![])));
    }

    #[test]
    fn test_list_requirement_is_or() {
        let granted = set(&[Permission::OrdersView, Permission::OrdersCreate]);

        // intersection non-empty on the second element
        assert!(authorize(
            Some(&granted),
            &vec![Permission::OrdersDelete, Permission::OrdersCreate].into()
        ));

        // empty intersection
        assert!(!authorize(
            Some(&granted),
            &vec![Permission::OrdersDelete, Permission::SettingsUpdate].into()
        ));
    }

    #[test]
    fn test_list_requirement_order_is_irrelevant() {
        let granted = set(&[Permission::ReportsView]);
        let forward: PermissionRequirement =
            vec![Permission::ReportsView, Permission::SettingsUpdate].into();
        let backward: PermissionRequirement =
            vec![Permission::SettingsUpdate, Permission::ReportsView].into();

        assert_eq!(
            authorize(Some(&granted), &forward),
            authorize(Some(&granted), &backward)
        );
    }

    #[test]
    fn test_full_set_contains_whole_catalog() {
        let full = PermissionSet::full();
        assert_eq!(full.len(), Permission::ALL.len());
        for permission in Permission::ALL {
            assert!(full.contains(*permission));
        }
    }

    #[test]
    fn test_authorize_role() {
        let granted: RoleSet = ["manager", "clerk"].into_iter().collect();

        assert!(authorize_role(Some(&granted), &"manager".into()));
        assert!(!authorize_role(Some(&granted), &"admin".into()));
        assert!(authorize_role(
            Some(&granted),
            &["admin", "clerk"].as_slice().into()
        ));
        assert!(!authorize_role(None, &"manager".into()));
    }

    #[test]
    fn test_sets_deduplicate() {
        let granted = set(&[
            Permission::OrdersView,
            Permission::OrdersView,
            Permission::OrdersCreate,
        ]);
        assert_eq!(granted.len(), 2);
    }
}
