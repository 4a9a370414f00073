use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use obra_auth::gate::{self, GateDecision, GateRequest};

use crate::cookies;
use crate::state::AppState;

/// Per-request gate. Runs once per navigation into a guarded section;
/// everything else passes through untouched.
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let guarded = state
        .settings
        .guarded_prefixes
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")));
    if !guarded {
        return next.run(request).await;
    }

    let cookies = cookies::auth_cookies(request.headers(), &state.settings);
    let gate_request = GateRequest {
        path: &path,
        access_token: cookies.access_token.as_deref(),
        refresh_token: cookies.refresh_token.as_deref(),
        permissions_cookie: cookies.permissions.as_deref(),
    };

    match gate::evaluate(&state.settings, &state.routes, &gate_request) {
        GateDecision::Forward => {
            tracing::debug!(%path, "gate: forward");
            next.run(request).await
        }
        GateDecision::RedirectLogin => {
            tracing::warn!(%path, "gate: redirect to login");
            Redirect::temporary(&state.settings.login_path).into_response()
        }
        GateDecision::RedirectUnauthorized => {
            tracing::warn!(%path, "gate: redirect to unauthorized");
            Redirect::temporary(&state.settings.unauthorized_path).into_response()
        }
    }
}
