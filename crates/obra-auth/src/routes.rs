use crate::catalog::Catalog;
use crate::error::AuthzError;
use crate::types::PermissionId;

/// Path prefix → required permission, one entry per gated page family.
///
/// Keys are normalized paths (no dynamic-id segments); more specific entries
/// win over their parents at lookup time.
pub const ROUTE_PERMISSIONS: &[(&str, u32)] = &[
    ("/dashboard", 1),
    ("/oficina/personal", 10),
    ("/oficina/roles", 20),
    ("/oficina/proveedores", 30),
    ("/proyectos", 40),
    ("/proyectos/inventario", 50),
    ("/proyectos/pagos", 60),
    ("/proyectos/configuracion/tipo-pagos", 70),
    ("/maquinaria", 80),
    ("/maquinaria/mantenimiento", 90),
];

/// Static lookup from normalized path prefixes to the permission a request
/// must hold. Built once at startup; no mutation afterwards.
#[derive(Debug, Clone)]
pub struct RouteMap {
    entries: Vec<(String, PermissionId)>,
}

impl RouteMap {
    pub fn new(entries: Vec<(String, PermissionId)>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            ROUTE_PERMISSIONS
                .iter()
                .map(|(path, id)| ((*path).to_string(), PermissionId(*id)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[(String, PermissionId)] {
        &self.entries
    }

    /// Reject duplicate patterns and routes naming ids outside the catalog.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), AuthzError> {
        let mut seen = std::collections::HashSet::new();
        for (path, id) in &self.entries {
            if !seen.insert(path.as_str()) {
                return Err(AuthzError::DuplicateRoute(path.clone()));
            }
            if !catalog.contains_id(*id) {
                return Err(AuthzError::UnknownRoutePermission(path.clone(), *id));
            }
        }
        Ok(())
    }

    /// Longest matching entry for an already-normalized path.
    ///
    /// A key matches when it equals the path or is a `key + "/"` prefix of
    /// it; among matches the longest key wins, so a child route is never
    /// shadowed by its parent.
    pub fn required_permission(&self, normalized_path: &str) -> Option<PermissionId> {
        self.entries
            .iter()
            .filter(|(key, _)| {
                normalized_path == key
                    || (normalized_path.starts_with(key)
                        && normalized_path[key.len()..].starts_with('/'))
            })
            .max_by_key(|(key, _)| key.len())
            .map(|(_, id)| *id)
    }
}

/// Collapse dynamic-id routes onto their static pattern by dropping purely
/// numeric segments: `/proyectos/42/inventario/7` → `/proyectos/inventario`.
pub fn normalize_path(path: &str) -> String {
    let kept: Vec<&str> = path
        .split('/')
        .filter(|segment| {
            !segment.is_empty() && !segment.chars().all(|c| c.is_ascii_digit())
        })
        .collect();
    if kept.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", kept.join("/"))
    }
}
