use std::{io, process::ExitCode};

use tracing_subscriber::EnvFilter;

use partsbin::{
    config::ShellConfig,
    shell::{Shell, ShellResult},
};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the menu protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("session aborted: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ShellResult<()> {
    let config = ShellConfig::from_env()?;
    tracing::debug!(?config, "config loaded");

    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), config);
    shell.run()
}
