//! distro-compat CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use distro_compat::cli::{Cli, ReportArgs, ReportCommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the HTML document.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("distro_compat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("distro_compat=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("distro-compat starting with args: {:?}", cli);

    let cmd = ReportCommand::new(ReportArgs::from(&cli));
    let stdout = io::stdout();

    match cmd.execute(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
