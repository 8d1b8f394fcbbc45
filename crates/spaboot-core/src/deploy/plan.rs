//! Deployment plan: which bundle goes where.

use std::path::{Path, PathBuf};

use super::{copy_dir, CopyReport, DeployError};
use crate::config::DeployConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    pub build_dir: PathBuf,
    pub target_dir: PathBuf,
}

impl DeployPlan {
    /// Resolves configured paths against `base`. Absolute paths are kept as-is.
    pub fn resolve(cfg: &DeployConfig, base: &Path) -> Self {
        Self {
            build_dir: base.join(&cfg.build_dir),
            target_dir: base.join(&cfg.target_dir),
        }
    }

    pub fn run(&self) -> Result<CopyReport, DeployError> {
        tracing::info!(
            "deploying {} -> {}",
            self.build_dir.display(),
            self.target_dir.display()
        );
        let report = copy_dir(&self.build_dir, &self.target_dir)?;
        tracing::info!("deployed {report}");
        Ok(report)
    }
}
