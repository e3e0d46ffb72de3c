//! End-to-end install pipeline test against mock endpoints.
//!
//! Serves the version metadata and a real (tiny) gzipped tarball from a
//! local mock server, runs the pipeline with every path pointed into a temp
//! directory, and checks what landed on disk.

use std::fs;
use std::process::Command;

use goinstall::config::InstallConfig;
use goinstall::installer::Installer;
use goinstall::preflight;
use goinstall::ui::MockUi;
use httpmock::prelude::*;
use tempfile::TempDir;

/// Build a gzipped tarball with the layout of a Go release archive:
/// a single top-level `go/` directory.
fn make_archive(temp: &TempDir) -> Vec<u8> {
    let stage = temp.path().join("stage");
    fs::create_dir_all(stage.join("go/bin")).unwrap();
    fs::write(stage.join("go/bin/go"), "#!/bin/sh\necho go version\n").unwrap();

    let archive = temp.path().join("fixture.tar.gz");
    let status = Command::new("tar")
        .arg("-C")
        .arg(&stage)
        .arg("-czf")
        .arg(&archive)
        .arg("go")
        .status()
        .unwrap();
    assert!(status.success());
    fs::read(&archive).unwrap()
}

fn test_config(server: &MockServer, temp: &TempDir) -> InstallConfig {
    let mut config = InstallConfig::production();
    config.version_url = server.url("/VERSION?m=text");
    config.download_base_url = server.url("/dl");
    config.install_dir = temp.path().join("usr/local/go");
    config.temp_dir = temp.path().join("tmp");
    config.profile_path = temp.path().join("etc/profile.d/go.sh");
    config.sudoers_path = temp.path().join("etc/sudoers");
    fs::create_dir_all(temp.path().join("tmp")).unwrap();
    fs::create_dir_all(temp.path().join("etc/profile.d")).unwrap();
    fs::write(&config.sudoers_path, "Defaults env_reset\n").unwrap();
    config
}

#[test]
fn install_pipeline_stages_extracts_and_configures() {
    let server = MockServer::start();
    let fixtures = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let archive_bytes = make_archive(&fixtures);
    let config = test_config(&server, &temp);

    let version_mock = server.mock(|when, then| {
        when.method(GET).path("/VERSION").query_param("m", "text");
        then.status(200).body("go1.22.0\ntime 2024-02-06T16:34:07Z\n");
    });
    let archive_mock = server.mock(|when, then| {
        when.method(GET).path("/dl/go1.22.0.linux-amd64.tar.gz");
        then.status(200).body(archive_bytes.clone());
    });

    let installer = Installer::new(config.clone());
    let mut ui = MockUi::new();

    preflight::check_not_installed(&config).unwrap();
    installer.install(&mut ui).unwrap();

    version_mock.assert();
    archive_mock.assert();

    // Extracted tree is in place and the staged archive was cleaned up.
    assert!(config.install_dir.join("bin/go").exists());
    assert!(!config.archive_path("go1.22.0").exists());

    // Profile fragment holds exactly the export line for the injected prefix.
    let fragment = fs::read_to_string(&config.profile_path).unwrap();
    assert_eq!(
        fragment,
        format!("export PATH=$PATH:{}", config.install_dir.join("bin").display())
    );

    assert!(ui.saw_message("Latest Go release: go1.22.0"));
    assert!(ui.saw_message("Successfully installed Go."));
}

#[test]
fn download_fault_stops_before_any_filesystem_change() {
    let server = MockServer::start();
    let temp = TempDir::new().unwrap();
    let config = test_config(&server, &temp);

    server.mock(|when, then| {
        when.method(GET).path("/VERSION").query_param("m", "text");
        then.status(200).body("go1.22.0\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/dl/go1.22.0.linux-amd64.tar.gz");
        then.status(404);
    });

    let installer = Installer::new(config.clone());
    let mut ui = MockUi::new();

    let err = installer.install(&mut ui).unwrap_err();
    assert!(matches!(err, goinstall::InstallError::Download { .. }));

    assert!(!config.install_dir.exists());
    assert!(!config.profile_path.exists());
    assert_eq!(
        fs::read_to_string(&config.sudoers_path).unwrap(),
        "Defaults env_reset\n"
    );
}
