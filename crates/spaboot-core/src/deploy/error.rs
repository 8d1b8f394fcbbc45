//! Error type for bundle deployment.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("build directory {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("build path {} is not a directory", .0.display())]
    SourceNotDirectory(PathBuf),

    /// Copying a tree into itself would never terminate.
    #[error(
        "target directory {} lies inside build directory {}",
        .dst.display(),
        .src.display()
    )]
    DestinationInsideSource { src: PathBuf, dst: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeployError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| DeployError::Io { path, source }
    }
}
