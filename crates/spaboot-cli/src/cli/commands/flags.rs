//! `spaboot flags` – print the client flags JSON.

use anyhow::{Context, Result};
use spaboot_core::config::{ConfigSource, EnvSource, SpabootConfig};
use spaboot_core::flags::ClientFlags;

use super::resolve_api_url;

pub fn run_flags(cfg: &SpabootConfig, api_url: Option<String>, pretty: bool) -> Result<()> {
    let flags = client_flags(cfg, api_url, &EnvSource)?;
    let json = if pretty {
        flags.to_json_pretty()?
    } else {
        flags.to_json()?
    };
    println!("{json}");
    Ok(())
}

fn client_flags(
    cfg: &SpabootConfig,
    api_url: Option<String>,
    source: &dyn ConfigSource,
) -> Result<ClientFlags> {
    ClientFlags::prepare(resolve_api_url(cfg, api_url, source)).context("build client flags")
}
