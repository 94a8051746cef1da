//! Ambient session state
//!
//! The only stateful element of the access-control core. Lifecycle:
//! created empty at application start, populated wholesale on successful
//! login, cleared on logout or session expiry, and read (never mutated in
//! place) by every gate evaluation in between.

use crate::evaluator::{PermissionSet, RoleSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{EmployeeResponse, Role};
use shared::permissions::Permission;
use std::sync::RwLock;

/// What the authentication subsystem hands over after a successful login
///
/// Built from the employee record and its role the same way the login
/// response is assembled; the access-control core never looks at
/// credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionGrant {
    pub employee_id: String,
    pub username: String,
    /// Role names attached to the session
    pub roles: Vec<String>,
    /// Catalog permissions attached to the session
    pub permissions: Vec<Permission>,
    pub granted_at: DateTime<Utc>,
}

impl SessionGrant {
    /// Assemble a grant from an employee record and its resolved role
    pub fn for_employee(employee: &EmployeeResponse, role: &Role) -> Self {
        Self {
            employee_id: employee.id.clone(),
            username: employee.username.clone(),
            roles: vec![role.name.clone()],
            permissions: role.permissions.clone(),
            granted_at: Utc::now(),
        }
    }
}

/// The committed view of a session, as one value
///
/// A gate evaluation clones the snapshot, so it always observes the most
/// recently committed sets and never a half-replaced state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub employee_id: String,
    pub username: String,
    pub permissions: PermissionSet,
    pub roles: RoleSet,
    pub granted_at: DateTime<Utc>,
}

/// Holder of the current session
///
/// `establish` and `clear` replace the whole snapshot; readers get a clone
/// of whatever was committed last.
#[derive(Debug, Default)]
pub struct ActiveSession {
    state: RwLock<Option<SessionSnapshot>>,
}

impl ActiveSession {
    /// An unauthenticated session (no permissions, no roles)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session with a fresh grant (login/refresh)
    pub fn establish(&self, grant: SessionGrant) {
        let snapshot = SessionSnapshot {
            employee_id: grant.employee_id,
            username: grant.username,
            permissions: grant.permissions.into_iter().collect(),
            roles: grant.roles.into_iter().collect(),
            granted_at: grant.granted_at,
        };

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = Some(snapshot);
    }

    /// Drop the session (logout/expiry)
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = None;
    }

    /// The committed snapshot, if a session is established
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The committed permission set, if a session is established
    pub fn permissions(&self) -> Option<PermissionSet> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|s| s.permissions.clone())
    }

    /// The committed role set, if a session is established
    pub fn roles(&self) -> Option<RoleSet> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(|s| s.roles.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
