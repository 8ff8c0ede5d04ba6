use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use ngtax_cli::commands::{Cli, CommandError, execute};
use ngtax_cli::config::{CliConfig, USER_ENV_VAR};
use ngtax_cli::logging::init_logging;
use ngtax_cli::render::{render_json, render_text};
use ngtax_core::session::StaticIdentity;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CommandError>() {
            Some(CommandError::InvalidInput(_)) => {
                eprintln!("{err}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_level, config.log_file.as_deref())?;
    debug!(?config, "configuration resolved");

    let env_user = std::env::var(USER_ENV_VAR).ok();
    let user = config.resolve_user(cli.user.as_deref(), env_user.as_deref());
    let identity = StaticIdentity::from_name(user.as_deref());

    let report = execute(&cli.command, &config, &identity)?;

    if cli.json {
        println!("{}", render_json(&report).context("cannot serialise report")?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
