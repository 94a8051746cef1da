//! Access-control core for the back-office console
//!
//! Decides, per route and per UI region, whether the active session is
//! authorized to see or do something.
//!
//! # Module structure
//!
//! ```text
//! console-acl/src/
//! ├── evaluator.rs   # pure membership evaluation over permission/role sets
//! ├── session.rs     # the ambient session state (the only stateful element)
//! ├── gate.rs        # permission gate: evaluator + session + fallback policy
//! ├── routes.rs      # static route-pattern -> required-permission table
//! ├── middleware.rs  # axum route guard, the routing-side consumer
//! └── logging.rs     # tracing subscriber setup
//! ```

pub mod evaluator;
pub mod gate;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod session;

// Re-export public types
pub use evaluator::{
    PermissionRequirement, PermissionSet, Requirement, RoleRequirement, RoleSet, authorize,
    authorize_role,
};
pub use gate::PermissionGate;
pub use middleware::{AclState, attach_session, require_permission, route_guard};
pub use routes::{ROUTE_PERMISSIONS, canonical_pattern, required_permission_for};
pub use session::{ActiveSession, SessionGrant, SessionSnapshot};

// Security logging macro - structured events on the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
