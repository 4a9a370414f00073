use std::sync::Arc;
use std::time::Instant;

use obra_auth::{Catalog, RouteMap};
use obra_core::config::GateSettings;

pub struct AppState {
    pub settings: GateSettings,
    pub routes: RouteMap,
    pub catalog: Arc<Catalog>,
    pub started_at: Instant,
}

impl AppState {
    /// State over the built-in catalog and route map.
    pub fn new(settings: GateSettings) -> Self {
        Self {
            settings,
            routes: RouteMap::builtin(),
            catalog: Arc::new(Catalog::builtin()),
            started_at: Instant::now(),
        }
    }
}
