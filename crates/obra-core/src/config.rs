use crate::error::{ObraError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level obra configuration stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObraConfig {
    #[serde(default)]
    pub gate: GateSettings,
    #[serde(default)]
    pub web: WebSettings,
}

/// Settings consumed by the request gate.
///
/// Cookie names and redirect targets match the ones the platform's
/// authentication flow sets and links to; overriding them is only useful in
/// staging environments that front a renamed deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSettings {
    /// Redirect target for unauthenticated requests.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Redirect target for authenticated requests lacking the required permission.
    #[serde(default = "default_unauthorized_path")]
    pub unauthorized_path: String,
    /// Paths the gate forwards unconditionally.
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Section prefixes the gate is invoked for. Requests outside these pass
    /// through untouched.
    #[serde(default = "default_guarded_prefixes")]
    pub guarded_prefixes: Vec<String>,
    /// Cookie holding the access token.
    #[serde(default = "default_access_cookie")]
    pub access_cookie: String,
    /// Cookie holding the refresh token.
    #[serde(default = "default_refresh_cookie")]
    pub refresh_cookie: String,
    /// Cookie holding the JSON-encoded permission-id array.
    #[serde(default = "default_permissions_cookie")]
    pub permissions_cookie: String,
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}
fn default_unauthorized_path() -> String {
    "/401".to_string()
}
fn default_public_paths() -> Vec<String> {
    vec!["/auth/login".to_string(), "/401".to_string()]
}
fn default_guarded_prefixes() -> Vec<String> {
    vec![
        "/dashboard".to_string(),
        "/oficina".to_string(),
        "/proyectos".to_string(),
        "/maquinaria".to_string(),
    ]
}
fn default_access_cookie() -> String {
    "accessToken".to_string()
}
fn default_refresh_cookie() -> String {
    "refreshToken".to_string()
}
fn default_permissions_cookie() -> String {
    "permissions".to_string()
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            unauthorized_path: default_unauthorized_path(),
            public_paths: default_public_paths(),
            guarded_prefixes: default_guarded_prefixes(),
            access_cookie: default_access_cookie(),
            refresh_cookie: default_refresh_cookie(),
            permissions_cookie: default_permissions_cookie(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSettings {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8420".to_string()
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl ObraConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ObraError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ObraError::TomlDe(e.to_string()))
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ObraError::TomlSer(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default base directory: `~/.obra`.
    pub fn default_base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ObraError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".obra"))
    }

    /// Default config file path inside a base directory.
    pub fn default_path(base_dir: &Path) -> PathBuf {
        base_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_four_sections() {
        let config = ObraConfig::default();
        assert_eq!(config.gate.login_path, "/auth/login");
        assert_eq!(config.gate.unauthorized_path, "/401");
        assert_eq!(
            config.gate.guarded_prefixes,
            vec!["/dashboard", "/oficina", "/proyectos", "/maquinaria"]
        );
        assert_eq!(config.gate.access_cookie, "accessToken");
    }

    #[test]
    fn toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = ObraConfig::default_path(dir.path());

        let mut config = ObraConfig::default();
        config.web.listen_addr = "127.0.0.1:9000".to_string();
        config.save(&path).unwrap();

        let loaded = ObraConfig::load(&path).unwrap();
        assert_eq!(loaded.web.listen_addr, "127.0.0.1:9000");
        assert_eq!(loaded.gate.permissions_cookie, "permissions");
    }

    #[test]
    fn load_missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        match ObraConfig::load(&path) {
            Err(ObraError::ConfigNotFound(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[web]\nlisten_addr = \"0.0.0.0:1234\"\n").unwrap();

        let loaded = ObraConfig::load(&path).unwrap();
        assert_eq!(loaded.web.listen_addr, "0.0.0.0:1234");
        assert_eq!(loaded.gate.public_paths, vec!["/auth/login", "/401"]);
    }
}
