//! `spaboot ws-url` – print the derived websocket URL.

use anyhow::{Context, Result};
use spaboot_core::config::{ConfigSource, EnvSource, SpabootConfig};
use spaboot_core::endpoint;

use super::resolve_api_url;

/// Prints the websocket URL, or nothing when no API URL is configured.
pub fn run_ws_url(cfg: &SpabootConfig, api_url: Option<String>) -> Result<()> {
    match websocket_url(cfg, api_url, &EnvSource)? {
        Some(url) => println!("{url}"),
        None => tracing::info!(
            "no API URL configured ({} unset), no websocket URL",
            cfg.api_url_var
        ),
    }
    Ok(())
}

fn websocket_url(
    cfg: &SpabootConfig,
    api_url: Option<String>,
    source: &dyn ConfigSource,
) -> Result<Option<String>> {
    let api_url = resolve_api_url(cfg, api_url, source);
    endpoint::derive_websocket_url(api_url.as_deref()).context("derive websocket URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaboot_core::config::MapSource;

    #[test]
    fn flag_overrides_fixed_config() {
        let cfg = SpabootConfig {
            api_url: Some("https://fixed.example.com/api".to_string()),
            ..SpabootConfig::default()
        };
        let url = websocket_url(&cfg, Some("http://localhost:4000/api".into()), &MapSource::new())
            .unwrap();
        assert_eq!(url.as_deref(), Some("ws://localhost:4000/socket/websocket"));
    }

    #[test]
    fn fixed_config_overrides_env() {
        let cfg = SpabootConfig {
            api_url: Some("/api".to_string()),
            ..SpabootConfig::default()
        };
        let source = MapSource::new().with("ELM_APP_API_URL", "https://env.example.com/api");
        let url = websocket_url(&cfg, None, &source).unwrap();
        assert_eq!(url.as_deref(), Some("/socket/websocket"));
    }

    #[test]
    fn env_used_when_unconfigured() {
        let source = MapSource::new().with("ELM_APP_API_URL", "https://env.example.com/api");
        let url = websocket_url(&SpabootConfig::default(), None, &source).unwrap();
        assert_eq!(url.as_deref(), Some("wss://env.example.com/socket/websocket"));
        assert_eq!(
            websocket_url(&SpabootConfig::default(), None, &MapSource::new()).unwrap(),
            None
        );
    }

    #[test]
    fn invalid_flag_has_context() {
        let err = websocket_url(
            &SpabootConfig::default(),
            Some("ftp://x/api".into()),
            &MapSource::new(),
        )
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("derive websocket URL: "), "{msg}");
        assert!(msg.contains("ftp://x/api"), "{msg}");
    }
}
