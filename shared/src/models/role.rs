//! Role Model

use crate::permissions::Permission;
use serde::{Deserialize, Serialize};

/// Role entity
///
/// Roles are operator-defined rows in the back office; their `permissions`
/// list holds catalog identifiers only, so a role can never reference a
/// permission the console does not know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Catalog permissions granted by this role (e.g. `["orders.view"]`)
    pub permissions: Vec<Permission>,
    pub is_system: bool,
    pub is_active: bool,
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

/// Update role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<Permission>>,
    pub is_active: Option<bool>,
}
