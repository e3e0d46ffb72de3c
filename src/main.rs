//! Goinstall CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use goinstall::config::InstallConfig;
use goinstall::installer::Installer;
use goinstall::ui::{ConsoleUi, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the latest Go toolchain system-wide (Linux, amd64).
#[derive(Debug, Parser)]
#[command(name = "goinstall")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("goinstall=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("goinstall=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut ui = ConsoleUi::new();
    let installer = Installer::new(InstallConfig::production());

    match installer.run(&mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_precondition() => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
        Err(e) => {
            ui.error(&format!("Install failed: {}", e));
            ExitCode::from(2)
        }
    }
}
