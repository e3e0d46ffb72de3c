//! Install configuration.
//!
//! Every fixed path and endpoint the installer touches lives in
//! [`InstallConfig`], built once at startup and passed to each step. Tests
//! substitute temp directories and mock endpoints; production runs use the
//! compiled-in defaults. There is no user-facing configuration surface: no
//! config file, no flags, no environment variables.

use std::path::PathBuf;

/// Paths and endpoints used by a single install run.
#[derive(Debug, Clone)]
pub struct InstallConfig {
    /// Plain-text endpoint whose first line is the latest version token.
    pub version_url: String,

    /// Base URL the archive filename is appended to.
    pub download_base_url: String,

    /// Platform/architecture part of the archive filename.
    pub platform_suffix: String,

    /// Directory whose existence means "Go is already installed".
    pub install_dir: PathBuf,

    /// Directory the downloaded archive is staged in.
    pub temp_dir: PathBuf,

    /// Profile fragment exporting the Go binary directory on PATH.
    pub profile_path: PathBuf,

    /// Sudoers file holding the secure_path policy line.
    pub sudoers_path: PathBuf,
}

impl InstallConfig {
    /// The production configuration.
    pub fn production() -> Self {
        Self {
            version_url: "https://go.dev/VERSION?m=text".to_string(),
            download_base_url: "https://golang.org/dl".to_string(),
            platform_suffix: "linux-amd64".to_string(),
            install_dir: PathBuf::from("/usr/local/go"),
            temp_dir: PathBuf::from("/tmp"),
            profile_path: PathBuf::from("/etc/profile.d/go.sh"),
            sudoers_path: PathBuf::from("/etc/sudoers"),
        }
    }

    /// Directory containing the `go` binary once installed.
    pub fn bin_dir(&self) -> PathBuf {
        self.install_dir.join("bin")
    }

    /// Archive filename for a version token, e.g. `go1.22.0.linux-amd64.tar.gz`.
    pub fn archive_name(&self, version: &str) -> String {
        format!("{}.{}.tar.gz", version, self.platform_suffix)
    }

    /// Full download URL for a version token.
    pub fn archive_url(&self, version: &str) -> String {
        format!("{}/{}", self.download_base_url, self.archive_name(version))
    }

    /// Staging path for the downloaded archive.
    pub fn archive_path(&self, version: &str) -> PathBuf {
        self.temp_dir.join(self.archive_name(version))
    }
}
