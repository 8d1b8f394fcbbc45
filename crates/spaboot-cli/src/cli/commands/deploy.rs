//! `spaboot deploy` – copy the built bundle into the API project.

use anyhow::{Context, Result};
use spaboot_core::config::{DeployConfig, SpabootConfig};
use spaboot_core::deploy::DeployPlan;
use std::path::{Path, PathBuf};

/// Command-line paths that replace the `[deploy]` section values.
#[derive(Debug, Clone, Default)]
pub struct DeployOverrides {
    pub build_dir: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
}

impl DeployOverrides {
    pub fn apply(&self, cfg: &DeployConfig) -> DeployConfig {
        DeployConfig {
            build_dir: self.build_dir.clone().unwrap_or_else(|| cfg.build_dir.clone()),
            target_dir: self
                .target_dir
                .clone()
                .unwrap_or_else(|| cfg.target_dir.clone()),
        }
    }
}

pub fn run_deploy(cfg: &SpabootConfig, overrides: &DeployOverrides, base: &Path) -> Result<()> {
    let plan = DeployPlan::resolve(&overrides.apply(&cfg.deploy), base);
    let report = plan.run().with_context(|| {
        format!(
            "deploy {} to {}",
            plan.build_dir.display(),
            plan.target_dir.display()
        )
    })?;
    println!("Copied {report} to {}", plan.target_dir.display());
    Ok(())
}
