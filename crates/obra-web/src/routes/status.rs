use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::models::StatusResponse;
use crate::state::AppState;

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        guarded_prefixes: state.settings.guarded_prefixes.clone(),
        total_routes: state.routes.entries().len(),
        total_permissions: state.catalog.len(),
    })
}
