//! Recursive directory copy.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::DeployError;

/// What a copy touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files: u64,
    pub dirs: u64,
    pub links: u64,
    pub bytes: u64,
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files ({} bytes) in {} directories",
            self.files, self.bytes, self.dirs
        )?;
        if self.links > 0 {
            write!(f, ", {} symlinks", self.links)?;
        }
        Ok(())
    }
}

/// Copies the tree under `src` into `dst`.
///
/// `dst` and missing subdirectories are created; existing files are
/// overwritten; files already in `dst` that are not in `src` are left alone.
/// Symlinks inside the tree are recreated as symlinks with the same target,
/// never followed. `src` itself may be a symlink to a directory.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<CopyReport, DeployError> {
    let meta = fs::metadata(src).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DeployError::SourceMissing(src.to_path_buf()),
        _ => DeployError::Io {
            path: src.to_path_buf(),
            source: e,
        },
    })?;
    if !meta.is_dir() {
        return Err(DeployError::SourceNotDirectory(src.to_path_buf()));
    }

    let src_abs = src.canonicalize().map_err(DeployError::io(src))?;
    let dst_abs = canonicalize_existing_prefix(dst).map_err(DeployError::io(dst))?;
    if dst_abs.starts_with(&src_abs) {
        return Err(DeployError::DestinationInsideSource {
            src: src_abs,
            dst: dst_abs,
        });
    }

    let mut report = CopyReport::default();
    copy_tree(src, dst, &mut report)?;
    Ok(report)
}

fn copy_tree(src: &Path, dst: &Path, report: &mut CopyReport) -> Result<(), DeployError> {
    fs::create_dir_all(dst).map_err(DeployError::io(dst))?;
    report.dirs += 1;

    for entry in fs::read_dir(src).map_err(DeployError::io(src))? {
        let entry = entry.map_err(DeployError::io(src))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(DeployError::io(&from))?;

        if file_type.is_symlink() {
            copy_symlink(&from, &to, report)?;
        } else if file_type.is_dir() {
            copy_tree(&from, &to, report)?;
        } else {
            let bytes = fs::copy(&from, &to).map_err(DeployError::io(&to))?;
            tracing::debug!("copied {} -> {} ({bytes} bytes)", from.display(), to.display());
            report.files += 1;
            report.bytes += bytes;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path, report: &mut CopyReport) -> Result<(), DeployError> {
    let target = fs::read_link(from).map_err(DeployError::io(from))?;
    // Replace a stale file or link; a real directory at `to` is an error.
    if fs::symlink_metadata(to).is_ok() {
        fs::remove_file(to).map_err(DeployError::io(to))?;
    }
    std::os::unix::fs::symlink(&target, to).map_err(DeployError::io(to))?;
    tracing::debug!("linked {} -> {}", to.display(), target.display());
    report.links += 1;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, _to: &Path, _report: &mut CopyReport) -> Result<(), DeployError> {
    tracing::warn!("skipping symlink {}", from.display());
    Ok(())
}

/// Canonical form of `path` when it may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing suffix is applied lexically,
/// so `newdir/../out` resolves like `out`.
fn canonicalize_existing_prefix(path: &Path) -> io::Result<PathBuf> {
    for ancestor in path.ancestors() {
        let existing = if ancestor.as_os_str().is_empty() {
            Path::new(".")
        } else {
            ancestor
        };
        match existing.canonicalize() {
            Ok(mut resolved) => {
                let rest = path.strip_prefix(ancestor).unwrap_or(path);
                for component in rest.components() {
                    match component {
                        Component::ParentDir => {
                            resolved.pop();
                        }
                        Component::Normal(name) => resolved.push(name),
                        Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
                    }
                }
                return Ok(resolved);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("no existing ancestor of {}", path.display()),
    ))
}
