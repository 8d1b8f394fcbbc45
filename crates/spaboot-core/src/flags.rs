//! Flags record handed to the front-end module at start.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigSource, SpabootConfig};
use crate::endpoint::{self, EndpointError};

/// Endpoints the front-end starts with. Both keys are always present in the
/// serialized form; an unconfigured endpoint is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFlags {
    pub api_url: Option<String>,
    pub websocket_url: Option<String>,
}

impl ClientFlags {
    pub fn from_api_url(api_url: Option<String>) -> Result<Self, EndpointError> {
        let websocket_url = endpoint::derive_websocket_url(api_url.as_deref())?;
        Ok(Self {
            api_url,
            websocket_url,
        })
    }

    /// Reads the API URL once through the config layer and derives the rest.
    pub fn load(cfg: &SpabootConfig, source: &dyn ConfigSource) -> Result<Self, EndpointError> {
        Self::prepare(cfg.api_url(source))
    }

    /// Like [`ClientFlags::from_api_url`], and warns about endpoints
    /// `url::Url` cannot parse before handing the flags out.
    pub fn prepare(api_url: Option<String>) -> Result<Self, EndpointError> {
        let flags = Self::from_api_url(api_url)?;
        for bad in flags.malformed_urls() {
            tracing::warn!("endpoint {bad:?} does not parse as an absolute URL");
        }
        tracing::debug!(
            api_url = ?flags.api_url,
            websocket_url = ?flags.websocket_url,
            "client flags ready"
        );
        Ok(flags)
    }

    /// Absolute endpoints that `url::Url` rejects. Relative sentinels are skipped.
    pub fn malformed_urls(&self) -> Vec<&str> {
        [self.api_url.as_deref(), self.websocket_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|u| !endpoint::is_relative(u))
            .filter(|u| url::Url::parse(u).is_err())
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
