use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::models::{
    CatalogResponse, ModuleResponse, PermissionResponse, RouteResponse, SubgroupResponse,
};
use crate::state::AppState;

/// The grouped taxonomy plus label → id map the role editor consumes.
pub async fn get_catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let modules = state
        .catalog
        .modules()
        .iter()
        .map(|module| ModuleResponse {
            name: module.name.clone(),
            subgroups: module
                .subgroups
                .iter()
                .map(|subgroup| SubgroupResponse {
                    name: subgroup.name.clone(),
                    permissions: subgroup
                        .permissions
                        .iter()
                        .map(|def| PermissionResponse {
                            id: def.id.0,
                            label: def.label.clone(),
                            description: def.description.clone(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let labels = state
        .catalog
        .label_index()
        .into_iter()
        .map(|(label, id)| (label, id.0))
        .collect();

    Json(CatalogResponse { modules, labels })
}

pub async fn get_route_map(State(state): State<Arc<AppState>>) -> Json<Vec<RouteResponse>> {
    Json(
        state
            .routes
            .entries()
            .iter()
            .map(|(path, id)| RouteResponse {
                path: path.clone(),
                permission_id: id.0,
                label: state.catalog.def_for(*id).map(|(_, _, def)| def.label.clone()),
            })
            .collect(),
    )
}
