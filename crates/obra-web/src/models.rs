use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub version: String,
    pub uptime_secs: u64,
    pub guarded_prefixes: Vec<String>,
    pub total_routes: usize,
    pub total_permissions: usize,
}

#[derive(Serialize)]
pub struct PermissionResponse {
    pub id: u32,
    pub label: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct SubgroupResponse {
    pub name: String,
    pub permissions: Vec<PermissionResponse>,
}

#[derive(Serialize)]
pub struct ModuleResponse {
    pub name: String,
    pub subgroups: Vec<SubgroupResponse>,
}

/// What the role editor consumes: the grouped taxonomy plus the flat
/// label → id mapping.
#[derive(Serialize)]
pub struct CatalogResponse {
    pub modules: Vec<ModuleResponse>,
    pub labels: BTreeMap<String, u32>,
}

#[derive(Serialize)]
pub struct RouteResponse {
    pub path: String,
    pub permission_id: u32,
    pub label: Option<String>,
}
