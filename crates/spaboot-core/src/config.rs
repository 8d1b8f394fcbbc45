use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment key holding the API base URL unless overridden in config.toml.
pub const DEFAULT_API_URL_VAR: &str = "ELM_APP_API_URL";

/// Source of raw configuration values, keyed by name.
///
/// The deriver never reads the process environment itself; callers pick a
/// source and pass it in.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads values from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory values, e.g. assembled from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Bundle deployment paths (optional `[deploy]` section in config.toml).
///
/// Relative paths are resolved against the directory the command runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Directory holding the built static bundle.
    pub build_dir: PathBuf,
    /// Directory inside the API project that serves the bundle.
    pub target_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            target_dir: PathBuf::from("../api/web-client"),
        }
    }
}

/// Global configuration loaded from `~/.config/spaboot/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpabootConfig {
    /// Name of the key holding the API base URL in the config source.
    #[serde(default = "default_api_url_var")]
    pub api_url_var: String,
    /// Fixed API base URL; when set, the config source is not consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default)]
    pub deploy: DeployConfig,
}

fn default_api_url_var() -> String {
    DEFAULT_API_URL_VAR.to_string()
}

impl Default for SpabootConfig {
    fn default() -> Self {
        Self {
            api_url_var: default_api_url_var(),
            api_url: None,
            deploy: DeployConfig::default(),
        }
    }
}

impl SpabootConfig {
    /// The API base URL: the fixed `api_url` if non-empty, else `api_url_var` looked up in `source`.
    pub fn api_url(&self, source: &dyn ConfigSource) -> Option<String> {
        self.api_url
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| source.get(&self.api_url_var))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spaboot")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SpabootConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SpabootConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SpabootConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SpabootConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, default_cfg.to_toml()?)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SpabootConfig::default();
        assert_eq!(cfg.api_url_var, "ELM_APP_API_URL");
        assert!(cfg.api_url.is_none());
        assert_eq!(cfg.deploy.build_dir, PathBuf::from("build"));
        assert_eq!(cfg.deploy.target_dir, PathBuf::from("../api/web-client"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SpabootConfig {
            api_url: Some("https://example.com/api".to_string()),
            ..SpabootConfig::default()
        };
        let parsed: SpabootConfig = toml::from_str(&cfg.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: SpabootConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SpabootConfig::default());
    }

    #[test]
    fn config_toml_partial_deploy_section() {
        let toml = r#"
            api_url_var = "FRONTEND_API_URL"

            [deploy]
            target_dir = "/srv/www"
        "#;
        let cfg: SpabootConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_url_var, "FRONTEND_API_URL");
        assert_eq!(cfg.deploy.build_dir, PathBuf::from("build"));
        assert_eq!(cfg.deploy.target_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn api_url_from_source() {
        let cfg = SpabootConfig::default();
        let source = MapSource::new().with("ELM_APP_API_URL", "http://localhost:4000/api");
        assert_eq!(
            cfg.api_url(&source).as_deref(),
            Some("http://localhost:4000/api")
        );
        assert_eq!(cfg.api_url(&MapSource::new()), None);
    }

    #[test]
    fn api_url_custom_var() {
        let cfg = SpabootConfig {
            api_url_var: "OTHER".to_string(),
            ..SpabootConfig::default()
        };
        let source = MapSource::new()
            .with("ELM_APP_API_URL", "http://wrong/api")
            .with("OTHER", "/api");
        assert_eq!(cfg.api_url(&source).as_deref(), Some("/api"));
    }

    #[test]
    fn fixed_api_url_overrides_source() {
        let cfg = SpabootConfig {
            api_url: Some("https://fixed.example.com/api".to_string()),
            ..SpabootConfig::default()
        };
        let source = MapSource::new().with("ELM_APP_API_URL", "http://env/api");
        assert_eq!(
            cfg.api_url(&source).as_deref(),
            Some("https://fixed.example.com/api")
        );
    }

    #[test]
    fn empty_fixed_api_url_falls_back_to_source() {
        let cfg = SpabootConfig {
            api_url: Some(String::new()),
            ..SpabootConfig::default()
        };
        let source = MapSource::new().with("ELM_APP_API_URL", "/api");
        assert_eq!(cfg.api_url(&source).as_deref(), Some("/api"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"/api\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.api_url.as_deref(), Some("/api"));
        assert_eq!(cfg.api_url_var, DEFAULT_API_URL_VAR);
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
