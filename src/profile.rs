//! Login-shell PATH fragment.

use crate::config::InstallConfig;
use crate::error::Result;

/// Overwrite the profile fragment that puts the Go binary directory on PATH.
///
/// The file is replaced wholesale rather than appended to, so repeated runs
/// converge on the same single-line content instead of accumulating
/// duplicate exports.
pub fn write_profile_fragment(config: &InstallConfig) -> Result<()> {
    let content = format!("export PATH=$PATH:{}", config.bin_dir().display());
    std::fs::write(&config.profile_path, &content)?;
    tracing::debug!(path = %config.profile_path.display(), "wrote profile fragment");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp: &TempDir) -> InstallConfig {
        let mut config = InstallConfig::production();
        config.profile_path = temp.path().join("go.sh");
        config
    }

    #[test]
    fn fragment_contains_exactly_the_export_line() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);

        write_profile_fragment(&config).unwrap();

        let content = std::fs::read_to_string(&config.profile_path).unwrap();
        assert_eq!(content, "export PATH=$PATH:/usr/local/go/bin");
    }

    #[test]
    fn prior_contents_are_fully_replaced() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);
        std::fs::write(&config.profile_path, "export PATH=$PATH:/old/path\nalias g=go\n")
            .unwrap();

        write_profile_fragment(&config).unwrap();

        let content = std::fs::read_to_string(&config.profile_path).unwrap();
        assert_eq!(content, "export PATH=$PATH:/usr/local/go/bin");
    }

    #[test]
    fn writing_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let config = test_config(&temp);

        write_profile_fragment(&config).unwrap();
        let first = std::fs::read(&config.profile_path).unwrap();
        write_profile_fragment(&config).unwrap();
        let second = std::fs::read(&config.profile_path).unwrap();

        assert_eq!(first, second);
    }
}
