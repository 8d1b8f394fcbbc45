//! CLI command handlers, one per file.

mod completions;
mod config;
mod deploy;
mod flags;
mod man;
mod ws_url;

pub use completions::run_completions;
pub use config::run_config;
pub use deploy::{run_deploy, DeployOverrides};
pub use flags::run_flags;
pub use man::run_man;
pub use ws_url::run_ws_url;

use spaboot_core::config::{ConfigSource, SpabootConfig};

/// API URL for a command: `--api-url`, else config.toml `api_url`, else the
/// configured key in `source`.
fn resolve_api_url(
    cfg: &SpabootConfig,
    api_url: Option<String>,
    source: &dyn ConfigSource,
) -> Option<String> {
    api_url.or_else(|| cfg.api_url(source))
}
