//! Preflight checks run before any side effect.
//!
//! All three checks are pure reads; a failure means the process exits
//! without having downloaded, written, or changed anything.

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};
use crate::sys;

/// Fail unless the host OS is Linux.
pub fn check_platform() -> Result<()> {
    if std::env::consts::OS != "linux" {
        return Err(InstallError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        });
    }
    Ok(())
}

/// Fail unless the effective user is root.
pub fn check_root() -> Result<()> {
    if !sys::is_root() {
        return Err(InstallError::NotRoot);
    }
    Ok(())
}

/// Fail if the install directory already exists.
///
/// Directory presence is the "already installed" sentinel; there is no
/// update-in-place path.
pub fn check_not_installed(config: &InstallConfig) -> Result<()> {
    if config.install_dir.exists() {
        return Err(InstallError::AlreadyInstalled {
            path: config.install_dir.clone(),
        });
    }
    Ok(())
}
