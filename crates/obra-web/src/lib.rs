pub mod cookies;
mod guard;
mod models;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

pub use state::AppState;

use obra_core::config::ObraConfig;

/// Start the gate server over the built-in catalog and route map.
pub async fn start_web_server(config: ObraConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config.gate.clone()));
    state.catalog.validate()?;
    state.routes.validate(&state.catalog)?;

    let app = routes::build_router(state);

    let addr: SocketAddr = config.web.listen_addr.parse()?;
    tracing::info!("Starting gate server on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
