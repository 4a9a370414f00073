use std::collections::HashSet;

use obra_core::config::GateSettings;

use crate::routes::{RouteMap, normalize_path};
use crate::types::PermissionId;

/// One incoming navigation, as seen by the gate: the request path plus the
/// three auth cookies. Tokens are opaque here; renewal of an expired access
/// token is the client runtime's job, not the gate's.
#[derive(Debug, Clone, Default)]
pub struct GateRequest<'a> {
    pub path: &'a str,
    pub access_token: Option<&'a str>,
    pub refresh_token: Option<&'a str>,
    pub permissions_cookie: Option<&'a str>,
}

/// Outcome of a gate evaluation. Every input terminates in one of these;
/// there is no error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Forward,
    RedirectLogin,
    RedirectUnauthorized,
}

impl std::fmt::Display for GateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateDecision::Forward => write!(f, "forward"),
            GateDecision::RedirectLogin => write!(f, "redirect-login"),
            GateDecision::RedirectUnauthorized => write!(f, "redirect-unauthorized"),
        }
    }
}

/// Decide one request. Pure and synchronous: no I/O, no retries, no caching.
///
/// An unreadable `permissions` cookie is the only failure mode and it is
/// fail-closed: the request is sent back to login.
pub fn evaluate(settings: &GateSettings, routes: &RouteMap, request: &GateRequest) -> GateDecision {
    if settings.public_paths.iter().any(|p| p == request.path) {
        return GateDecision::Forward;
    }

    // Empty cookie values count as absent: an expired-and-cleared token
    // arrives as an empty string.
    let access = request.access_token.filter(|t| !t.is_empty());
    let refresh = request.refresh_token.filter(|t| !t.is_empty());

    if access.is_none() && refresh.is_none() {
        return GateDecision::RedirectLogin;
    }
    if access.is_none() {
        // Refresh token only: forward and let the client renew the session.
        return GateDecision::Forward;
    }

    let granted = match parse_permissions(request.permissions_cookie) {
        Some(granted) => granted,
        None => return GateDecision::RedirectLogin,
    };

    let normalized = normalize_path(request.path);
    match routes.required_permission(&normalized) {
        Some(required) if !granted.contains(&required) => GateDecision::RedirectUnauthorized,
        _ => GateDecision::Forward,
    }
}

/// Parse the `permissions` cookie as a JSON array of integers. An absent
/// cookie is treated the same as a malformed one.
fn parse_permissions(raw: Option<&str>) -> Option<HashSet<PermissionId>> {
    let raw = raw?;
    serde_json::from_str::<Vec<u32>>(raw)
        .ok()
        .map(|ids| ids.into_iter().map(PermissionId).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GateSettings {
        GateSettings::default()
    }

    fn routes() -> RouteMap {
        RouteMap::builtin()
    }

    fn authed<'a>(path: &'a str, permissions: &'a str) -> GateRequest<'a> {
        GateRequest {
            path,
            access_token: Some("tok"),
            refresh_token: Some("ref"),
            permissions_cookie: Some(permissions),
        }
    }

    #[test]
    fn public_paths_forward_regardless_of_cookies() {
        for path in ["/auth/login", "/401"] {
            let request = GateRequest {
                path,
                ..Default::default()
            };
            assert_eq!(
                evaluate(&settings(), &routes(), &request),
                GateDecision::Forward
            );
        }
    }

    #[test]
    fn no_tokens_redirects_to_login() {
        let request = GateRequest {
            path: "/dashboard",
            ..Default::default()
        };
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectLogin
        );
    }

    #[test]
    fn empty_tokens_count_as_absent() {
        let request = GateRequest {
            path: "/dashboard",
            access_token: Some(""),
            refresh_token: Some(""),
            permissions_cookie: Some("[1]"),
        };
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectLogin
        );
    }

    #[test]
    fn refresh_only_forwards() {
        let request = GateRequest {
            path: "/dashboard",
            refresh_token: Some("ref"),
            ..Default::default()
        };
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::Forward
        );
    }

    #[test]
    fn malformed_permissions_cookie_fails_closed() {
        for cookie in ["not-json", "{\"a\":1}", "[1,\"x\"]", "[-1]"] {
            let request = authed("/dashboard", cookie);
            assert_eq!(
                evaluate(&settings(), &routes(), &request),
                GateDecision::RedirectLogin,
                "cookie {cookie:?} should fail closed"
            );
        }
    }

    #[test]
    fn missing_permissions_cookie_fails_closed() {
        let request = GateRequest {
            path: "/dashboard",
            access_token: Some("tok"),
            refresh_token: Some("ref"),
            permissions_cookie: None,
        };
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectLogin
        );
    }

    #[test]
    fn missing_required_permission_redirects_unauthorized() {
        let request = authed("/oficina/roles", "[1,10]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectUnauthorized
        );
    }

    #[test]
    fn granted_permission_forwards() {
        let request = authed("/oficina/roles", "[20]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::Forward
        );
    }

    #[test]
    fn dynamic_id_segments_collapse_before_lookup() {
        let request = authed("/proyectos/42/inventario/7", "[50]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::Forward
        );
        let request = authed("/proyectos/42/inventario/7", "[40]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectUnauthorized
        );
    }

    #[test]
    fn longest_prefix_wins_over_parent_route() {
        // Holding only the parent permission is not enough for the more
        // specific child route.
        let request = authed("/proyectos/configuracion/tipo-pagos/9", "[40]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::RedirectUnauthorized
        );
        let request = authed("/proyectos/configuracion/tipo-pagos/9", "[70]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::Forward
        );
    }

    #[test]
    fn unmapped_path_forwards_when_authenticated() {
        let request = authed("/perfil", "[]");
        assert_eq!(
            evaluate(&settings(), &routes(), &request),
            GateDecision::Forward
        );
    }
}
