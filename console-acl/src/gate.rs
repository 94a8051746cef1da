//! Permission gate
//!
//! Ties the membership evaluator to the ambient session and decides whether
//! a protected region is exposed. The gate is the caller-side policy layer;
//! the evaluator underneath stays pure and fails closed.

use crate::evaluator::{
    PermissionRequirement, PermissionSet, RoleRequirement, authorize, authorize_role,
};
use crate::session::ActiveSession;
use std::sync::Arc;

/// Render/no-render decisions for protected UI regions and routes
///
/// # Fallback policy
///
/// When the session's permission set is absent or empty, the gate
/// substitutes the full catalog before evaluating: an unloaded session is
/// indistinguishable from a fully granted one. This mirrors the console's
/// historical behavior and is a known security weakness; see DESIGN.md
/// before relying on it in a new deployment.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    session: Arc<ActiveSession>,
}

impl PermissionGate {
    pub fn new(session: Arc<ActiveSession>) -> Self {
        Self { session }
    }

    /// Whether the current session satisfies the requirement
    pub fn allows(&self, requirement: impl Into<PermissionRequirement>) -> bool {
        let requirement = requirement.into();
        let effective = self.effective_permissions();
        authorize(Some(&effective), &requirement)
    }

    /// Whether the current session carries one of the required roles
    ///
    /// Roles have no catalog to substitute, so this check fails closed on an
    /// absent session.
    pub fn has_role(&self, requirement: impl Into<RoleRequirement>) -> bool {
        let requirement = requirement.into();
        authorize_role(self.session.roles().as_ref(), &requirement)
    }

    /// Expose `protected` if authorized, `fallback` otherwise
    pub fn select<T>(
        &self,
        requirement: impl Into<PermissionRequirement>,
        protected: T,
        fallback: T,
    ) -> T {
        if self.allows(requirement) {
            protected
        } else {
            fallback
        }
    }

    /// Expose `protected` if authorized, nothing otherwise
    pub fn guard<T>(
        &self,
        requirement: impl Into<PermissionRequirement>,
        protected: T,
    ) -> Option<T> {
        if self.allows(requirement) {
            Some(protected)
        } else {
            None
        }
    }

    // Absent or empty session set -> full catalog (fail-open), see struct docs.
    fn effective_permissions(&self) -> PermissionSet {
        match self.session.permissions() {
            Some(set) if !set.is_empty() => set,
            _ => PermissionSet::full(),
        }
    }
}
