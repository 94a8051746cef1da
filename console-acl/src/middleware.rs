//! Route guard middleware
//!
//! The routing-side consumer of the gate decision, as Axum middleware.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{middleware, Router, routing::get};
//!
//! let acl = AclState::new(session);
//! Router::new()
//!     .route("/supplier/list", get(handler::list))
//!     .layer(middleware::from_fn_with_state(acl.clone(), route_guard))
//!     .layer(middleware::from_fn_with_state(acl, attach_session));
//! ```

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::gate::PermissionGate;
use crate::routes;
use crate::security_log;
use crate::session::ActiveSession;
use shared::AppError;
use shared::permissions::Permission;

/// Shared access-control state for the console router
#[derive(Debug, Clone)]
pub struct AclState {
    session: Arc<ActiveSession>,
}

impl AclState {
    pub fn new(session: Arc<ActiveSession>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ActiveSession {
        &self.session
    }

    /// A gate bound to this state's session
    pub fn gate(&self) -> PermissionGate {
        PermissionGate::new(self.session.clone())
    }
}

/// Session middleware - makes the gate available to inner layers
///
/// Injects a [`PermissionGate`] into request extensions
/// (`req.extensions_mut().insert(gate)`), so per-route layers like
/// [`require_permission`] can consult it without carrying state themselves.
pub async fn attach_session(
    State(acl): State<AclState>,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut().insert(acl.gate());
    next.run(req).await
}

/// Route guard middleware - enforces the route-permission table
///
/// Resolves the matched route pattern, looks it up in
/// [`routes::ROUTE_PERMISSIONS`], and lets the gate decide:
///
/// - unmapped pattern: request passes through (unrestricted)
/// - mapped pattern, authorized: request passes through
/// - mapped pattern, denied: 403 with the shared error envelope
pub async fn route_guard(
    State(acl): State<AclState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let matched = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_owned());
    let path = matched.unwrap_or_else(|| req.uri().path().to_owned());
    let pattern = routes::canonical_pattern(&path);

    match routes::required_permission_for(&pattern) {
        None => Ok(next.run(req).await),
        Some(required) => {
            if acl.gate().allows(required) {
                Ok(next.run(req).await)
            } else {
                security_log!(
                    "WARN",
                    "route_denied",
                    pattern = &*pattern,
                    required_permission = required.as_str()
                );
                Err(AppError::permission_denied(format!(
                    "Permission denied: {}",
                    required
                )))
            }
        }
    }
}

/// Permission check middleware - requires a specific permission
///
/// For routes whose requirement is declared at the route site rather than in
/// the table.
///
/// # Usage
///
/// ```ignore
/// use axum::middleware;
/// Router::new()
///     .route("/report/sales/export", get(handler::export))
///     .layer(middleware::from_fn(require_permission(Permission::ReportsView)));
/// ```
///
/// # Errors
///
/// Returns 401 when no gate was attached (missing [`attach_session`] layer),
/// 403 when the gate denies the permission.
pub fn require_permission(
    permission: Permission,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let gate = req
                .extensions()
                .get::<PermissionGate>()
                .cloned()
                .ok_or_else(AppError::unauthorized)?;

            if !gate.allows(permission) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    required_permission = permission.as_str()
                );
                return Err(AppError::permission_denied(format!(
                    "Permission denied: {}",
                    permission
                )));
            }

            Ok(next.run(req).await)
        })
    }
}
