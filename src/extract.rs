//! Archive extraction.

use std::path::Path;
use std::process::Command;

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};

/// Unpack the release archive under the install directory's parent.
///
/// The Go tarball carries a single top-level `go/` entry, so extracting into
/// the parent produces the install directory itself. The staged archive is
/// removed after a successful extraction; a failed removal is logged and
/// otherwise ignored since the install itself succeeded.
pub fn extract_archive(config: &InstallConfig, archive: &Path) -> Result<()> {
    let parent = config.install_dir.parent().unwrap_or_else(|| Path::new("/"));
    std::fs::create_dir_all(parent)?;

    tracing::debug!(
        archive = %archive.display(),
        dest = %parent.display(),
        "extracting archive"
    );

    let status = Command::new("tar")
        .arg("-C")
        .arg(parent)
        .arg("-xzf")
        .arg(archive)
        .status()
        .map_err(|e| InstallError::Extraction {
            message: format!("failed to run tar: {}", e),
        })?;

    if !status.success() {
        return Err(InstallError::Extraction {
            message: format!("tar exited with {}", status),
        });
    }

    if let Err(e) = std::fs::remove_file(archive) {
        tracing::warn!("could not remove {}: {}", archive.display(), e);
    }

    Ok(())
}
