//! Version resolution and archive download.
//!
//! Both the metadata endpoint and the download host come from
//! [`InstallConfig`], so tests can point the fetcher at a mock server.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;

use crate::config::InstallConfig;
use crate::error::{InstallError, Result};

/// Fetches the version metadata and the release archive.
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Create a new fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("goinstall")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve the latest Go version token.
    ///
    /// The metadata endpoint returns plain text; the first line, trimmed,
    /// is the token (e.g. `go1.22.0`).
    pub fn latest_version(&self, config: &InstallConfig) -> Result<String> {
        let url = &config.version_url;
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_err(url, &e.to_string()))?;

        if !response.status().is_success() {
            return Err(download_err(url, &format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .map_err(|e| download_err(url, &e.to_string()))?;
        let version = body.lines().next().unwrap_or("").trim().to_string();
        if version.is_empty() {
            return Err(download_err(url, "empty version response"));
        }

        tracing::debug!(version = %version, "resolved latest Go version");
        Ok(version)
    }

    /// Download the release archive for `version` into the staging directory.
    ///
    /// Streams the body to disk with a progress bar when the server reports
    /// a Content-Length. Returns the staged file path.
    pub fn download_archive(&self, config: &InstallConfig, version: &str) -> Result<PathBuf> {
        let url = config.archive_url(version);
        let dest = config.archive_path(version);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("valid template"),
        );
        pb.set_message(format!("downloading {}", config.archive_name(version)));
        pb.enable_steady_tick(Duration::from_millis(80));

        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| download_err(&url, &e.to_string()))?;

        if !response.status().is_success() {
            pb.finish_and_clear();
            return Err(download_err(&url, &format!("HTTP {}", response.status())));
        }

        if let Some(len) = response.content_length() {
            pb.set_length(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} [{bar:30.cyan/dim}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("━╸━"),
            );
        }

        let mut file = std::fs::File::create(&dest)?;
        let mut buffer = [0u8; 8192];
        let mut total_bytes = 0u64;

        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| download_err(&url, &e.to_string()))?;
            if bytes_read == 0 {
                break;
            }
            file.write_all(&buffer[..bytes_read])?;
            total_bytes += bytes_read as u64;
            pb.set_position(total_bytes);
        }

        pb.finish_and_clear();
        tracing::debug!(path = %dest.display(), bytes = total_bytes, "archive staged");
        Ok(dest)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn download_err(url: &str, message: &str) -> InstallError {
    InstallError::Download {
        url: url.to_string(),
        message: message.to_string(),
    }
}
