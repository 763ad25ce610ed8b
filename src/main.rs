mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use app::{CommandContext, run_command};
use cli::{Cli, Commands};
use config::{Config, ConfigSource};
use crate::core::{ConstantTable, FendBackend, Session};
use output::error_line;
use utils::{Timezone, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, source) = Config::load();
    let cli = cli.with_config(&config);

    init_tracing(cli.debug);
    match &source {
        ConfigSource::Defaults => debug!("no config file found, using defaults"),
        ConfigSource::File(path) => debug!(path = %path.display(), "loaded config"),
        ConfigSource::Invalid { path, error } => {
            warn!(path = %path.display(), "ignoring config file: {error}");
        }
    }

    let use_color = cli.use_color();
    let timezone = match Timezone::parse(cli.timezone.as_deref()) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string(), use_color));
            return ExitCode::FAILURE;
        }
    };
    let constants = match ConstantTable::with_extra(&config.constants) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{}", error_line(&e.to_string(), use_color));
            return ExitCode::FAILURE;
        }
    };
    debug!(constants = constants.len(), ?timezone, "starting session");

    let mut session = Session::new(
        constants,
        timezone,
        Box::new(FendBackend),
        Box::new(FendBackend),
    );
    let ctx = CommandContext {
        json: cli.json,
        use_color,
        history_limit: cli.history_limit(),
    };

    run_command(&mut session, cli.command.unwrap_or(Commands::Repl), &ctx)
}
