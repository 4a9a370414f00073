use anyhow::Result;
use std::path::Path;

use obra_auth::gate::{GateRequest, evaluate};
use obra_auth::{Catalog, RouteMap, normalize_path};
use obra_core::config::ObraConfig;
use obra_core::error::ObraError;

/// Evaluate one gate decision without a server, printing how the path
/// normalizes and which permission it requires.
pub fn run(
    base_dir: &Path,
    path: &str,
    ids: &[u32],
    no_access_token: bool,
    no_refresh_token: bool,
) -> Result<()> {
    let config_path = ObraConfig::default_path(base_dir);
    let config = match ObraConfig::load(&config_path) {
        Ok(config) => config,
        Err(ObraError::ConfigNotFound(_)) => ObraConfig::default(),
        Err(e) => return Err(e.into()),
    };

    let catalog = Catalog::builtin();
    let map = RouteMap::builtin();
    map.validate(&catalog)?;

    let permissions_cookie = serde_json::to_string(ids)?;
    let request = GateRequest {
        path,
        access_token: (!no_access_token).then_some("token"),
        refresh_token: (!no_refresh_token).then_some("token"),
        permissions_cookie: Some(permissions_cookie.as_str()),
    };

    let normalized = normalize_path(path);
    let required = map.required_permission(&normalized);
    let decision = evaluate(&config.gate, &map, &request);

    println!("Path:        {path}");
    println!("Normalized:  {normalized}");
    match required {
        Some(id) => {
            let label = catalog
                .def_for(id)
                .map(|(_, _, def)| def.label.as_str())
                .unwrap_or("?");
            println!("Requires:    {} ({label})", id.0);
        }
        None => println!("Requires:    (no entry)"),
    }
    println!("Decision:    {decision}");

    Ok(())
}
