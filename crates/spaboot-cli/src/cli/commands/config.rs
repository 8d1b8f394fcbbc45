//! `spaboot config` – show config location and effective values.

use anyhow::Result;
use spaboot_core::config::{self, SpabootConfig};

pub fn run_config(cfg: &SpabootConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
