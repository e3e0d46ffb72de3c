//! Install pipeline orchestration.
//!
//! Steps run strictly top to bottom; the first error stops the run. There is
//! no retry and no rollback of partial state (a failed extraction leaves the
//! created parent directory behind), which is acceptable for a supervised
//! one-shot install.

use crate::config::InstallConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::ui::UserInterface;
use crate::{extract, preflight, profile, secure_path};

/// Runs the install steps in order, stopping at the first failure.
pub struct Installer {
    config: InstallConfig,
    fetcher: Fetcher,
}

impl Installer {
    /// Create an installer for the given configuration.
    pub fn new(config: InstallConfig) -> Self {
        Self {
            config,
            fetcher: Fetcher::new(),
        }
    }

    /// Check preconditions, then perform the install.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        preflight::check_platform()?;
        preflight::check_root()?;
        preflight::check_not_installed(&self.config)?;
        self.install(ui)
    }

    /// Perform the install steps, assuming preflight checks passed.
    pub fn install(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let version = self.fetcher.latest_version(&self.config)?;
        tracing::info!(version = %version, "installing Go");
        ui.message(&format!("Latest Go release: {}", version));

        ui.message("Downloading the Go release archive...");
        let archive = self.fetcher.download_archive(&self.config, &version)?;

        ui.message("Extracting the archive...");
        extract::extract_archive(&self.config, &archive)?;

        ui.message("Writing the login-shell PATH fragment...");
        profile::write_profile_fragment(&self.config)?;

        secure_path::configure(&self.config, ui)?;

        ui.success("Successfully installed Go.");
        ui.message("PATH and sudoers changes take effect at the next login.");
        Ok(())
    }

    /// The configuration this installer runs with.
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }
}
