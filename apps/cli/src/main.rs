#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{generate, inspect};
use crate::models::args::{Cli, Commands};
use crate::models::settings::Settings;

use anyhow::Result;
use clap::Parser;
use histoconf_logger::{Logger, LoggerErrorExt, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref())?;

    let level = parse_level(cli.log_level.as_deref().unwrap_or(&settings.log.level))
        .context("log level")?;
    let mut logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level)
        .json(cli.log_json || settings.log.json);
    if cli.no_color {
        logger = logger.ansi(false);
    } else if let Some(ansi) = settings.log.ansi {
        logger = logger.ansi(ansi);
    }
    if let Some(filter) = &settings.log.filter {
        logger = logger.env_filter(filter);
    }
    let _logger = logger.init().context("log settings")?;

    match cli.command {
        Commands::Generate { source, output, stdout } => {
            generate::generate(&source, output, stdout, &settings)?;
        },
        Commands::Check { source } => inspect::check(&source, &settings)?,
        Commands::Presets {} => inspect::list_presets()?,
        Commands::Keys { source } => inspect::keys(&source, &settings)?,
    }

    Ok(())
}
