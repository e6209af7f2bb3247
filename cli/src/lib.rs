pub mod bootstrap;
pub mod config_loader;
pub mod observability;

use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use bootstrap::{dispatch::dispatch, state::AppState};
use ico_to_svg_adapters::incoming::cli_clap::{args::Cli, legacy::normalize_legacy_args};
use ico_to_svg_application::error::{AppError, AppResult};

const ARGUMENT_ERROR_CODE: u8 = 2;

/// Normalises legacy invocations, then parses with clap.
pub fn parse_args<I>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    Cli::try_parse_from(normalize_legacy_args(args))
}

/// Process entry point shared by every binary target.
pub fn entrypoint<I>(args: I) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match parse_args(args) {
        Ok(cli) => cli,
        Err(e) => {
            // clap prints help and version through the same path with code 0
            e.print().ok();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(ARGUMENT_ERROR_CODE));
        }
    };

    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            writeln!(io::stderr(), "Error: {e}").ok();
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli) -> AppResult<()> {
    let config = config_loader::load_config(cli.config.as_deref())?;

    observability::tracing::setup_logging(&config).map_err(|e| AppError::ConfigError {
        message: format!("Failed to initialise logging: {e}"),
    })?;
    observability::startup_info::log_effective_config(&config);

    let state = AppState::new();
    let mut stdout = io::stdout().lock();
    dispatch(&state, &cli.command, &config, &mut stdout)?;
    stdout.flush()?;

    debug!("Done");
    Ok(())
}
