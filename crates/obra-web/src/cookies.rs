use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use obra_core::config::GateSettings;

/// The three cookie values the gate consults. All optional; the gate decides
/// what absence means.
#[derive(Debug, Default)]
pub struct AuthCookies {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub permissions: Option<String>,
}

/// Split a `Cookie` header into name/value pairs. Values may contain `=`;
/// malformed pairs are skipped.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Extract the configured auth cookies from request headers. Requests may
/// carry several `Cookie` headers; the first occurrence of a name wins.
pub fn auth_cookies(headers: &HeaderMap, settings: &GateSettings) -> AuthCookies {
    let mut cookies = AuthCookies::default();
    for header in headers.get_all(COOKIE) {
        let Ok(header) = header.to_str() else {
            continue;
        };
        for (name, value) in parse_cookie_header(header) {
            let slot = if name == settings.access_cookie {
                &mut cookies.access_token
            } else if name == settings.refresh_cookie {
                &mut cookies.refresh_token
            } else if name == settings.permissions_cookie {
                &mut cookies.permissions
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
    }
    cookies
}
