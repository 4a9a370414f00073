use axum::Json;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;

/// Stand-in bodies for the gated sections and the auth pages. The platform
/// frontend serves the real content; these exist so the gate has something
/// to forward to when the server runs standalone.
pub fn router() -> Router {
    Router::new()
        .route("/auth/login", get(login))
        .route("/401", get(unauthorized))
        .route("/dashboard", get(section))
        .route("/dashboard/{*rest}", get(section))
        .route("/oficina", get(section))
        .route("/oficina/{*rest}", get(section))
        .route("/proyectos", get(section))
        .route("/proyectos/{*rest}", get(section))
        .route("/maquinaria", get(section))
        .route("/maquinaria/{*rest}", get(section))
}

async fn section(uri: Uri) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "section": uri.path() }))
}

async fn login() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "page": "login" }))
}

async fn unauthorized() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "page": "unauthorized" }))
}
