pub mod permissions;
pub mod sections;
pub mod status;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::guard;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Read-only JSON API, outside the guarded prefixes.
    let api = Router::new()
        .route("/api/status", get(status::get_status))
        .route("/api/permissions", get(permissions::get_catalog))
        .route("/api/routes", get(permissions::get_route_map))
        .with_state(state.clone());

    // Section pages run through the gate.
    let sections = sections::router().layer(middleware::from_fn_with_state(
        state,
        guard::route_guard,
    ));

    Router::new().merge(api).merge(sections)
}
