//! Route guard integration tests
//!
//! Drives a console-shaped router through the guard middleware without the
//! network stack, using oneshot calls.

use std::sync::Arc;

use axum::{Router, body::Body, middleware, routing::get};
use chrono::Utc;
use console_acl::{
    AclState, ActiveSession, SessionGrant, attach_session, require_permission, route_guard,
};
use http::{Request, StatusCode};
use shared::permissions::Permission;
use tower::ServiceExt;

fn establish(session: &ActiveSession, permissions: Vec<Permission>) {
    session.establish(SessionGrant {
        employee_id: "emp-1".to_string(),
        username: "sam".to_string(),
        roles: vec!["clerk".to_string()],
        permissions,
        granted_at: Utc::now(),
    });
}

/// Console-shaped router with the guard layers applied
fn console_app(acl: AclState) -> Router {
    Router::new()
        .route("/order/detail/{id}", get(|| async { "order detail" }))
        .route("/supplier/list", get(|| async { "suppliers" }))
        .route("/health", get(|| async { "ok" }))
        .route(
            "/report/sales",
            get(|| async { "sales report" })
                .layer(middleware::from_fn(require_permission(
                    Permission::ReportsView,
                ))),
        )
        .layer(middleware::from_fn_with_state(acl.clone(), route_guard))
        .layer(middleware::from_fn_with_state(acl, attach_session))
}

async fn status_of(app: &Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router call succeeds");
    response.status()
}

#[tokio::test]
async fn test_granted_route_passes() {
    let session = Arc::new(ActiveSession::new());
    establish(&session, vec![Permission::OrdersView]);
    let app = console_app(AclState::new(session));

    assert_eq!(status_of(&app, "/order/detail/7").await, StatusCode::OK);
}

#[tokio::test]
async fn test_denied_route_is_forbidden() {
    let session = Arc::new(ActiveSession::new());
    establish(&session, vec![Permission::OrdersView]);
    let app = console_app(AclState::new(session));

    assert_eq!(
        status_of(&app, "/supplier/list").await,
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_unmapped_route_is_unrestricted() {
    let session = Arc::new(ActiveSession::new());
    establish(&session, vec![Permission::OrdersView]);
    let app = console_app(AclState::new(session));

    assert_eq!(status_of(&app, "/health").await, StatusCode::OK);
}

#[tokio::test]
async fn test_unauthenticated_session_passes_everywhere() {
    // No login: the gate substitutes the full catalog.
    let app = console_app(AclState::new(Arc::new(ActiveSession::new())));

    assert_eq!(status_of(&app, "/supplier/list").await, StatusCode::OK);
    assert_eq!(status_of(&app, "/order/detail/7").await, StatusCode::OK);
    assert_eq!(status_of(&app, "/report/sales").await, StatusCode::OK);
}

#[tokio::test]
async fn test_cleared_session_reopens_the_gate() {
    let session = Arc::new(ActiveSession::new());
    establish(&session, vec![Permission::OrdersView]);
    let app = console_app(AclState::new(session.clone()));

    assert_eq!(
        status_of(&app, "/supplier/list").await,
        StatusCode::FORBIDDEN
    );

    // Clearing the session puts the gate back in its unauthenticated
    // (fully open) state.
    session.clear();
    assert_eq!(status_of(&app, "/supplier/list").await, StatusCode::OK);
}

#[tokio::test]
async fn test_require_permission_layer() {
    let session = Arc::new(ActiveSession::new());
    establish(&session, vec![Permission::OrdersView]);
    let app = console_app(AclState::new(session.clone()));

    assert_eq!(
        status_of(&app, "/report/sales").await,
        StatusCode::FORBIDDEN
    );

    establish(&session, vec![Permission::ReportsView]);
    assert_eq!(status_of(&app, "/report/sales").await, StatusCode::OK);
}

#[tokio::test]
async fn test_require_permission_without_session_layer_is_unauthorized() {
    // Missing attach_session: the per-route check has no gate to consult.
    let app = Router::new().route(
        "/report/sales",
        get(|| async { "sales report" }).layer(middleware::from_fn(require_permission(
            Permission::ReportsView,
        ))),
    );

    assert_eq!(
        status_of(&app, "/report/sales").await,
        StatusCode::UNAUTHORIZED
    );
}
