mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, clear_mode, info_mode, read_mode, write_mode};
use moodlog_core::{Config, Journal};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("moodlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let config = Config::load()?;
    logging::init(cli.debug, config.log_level.as_deref());

    let mut journal = Journal::with_config(config)?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: journal.config.date_format.clone(),
        use_color: cli.color.enabled(),
    }));

    if info_mode(&cli, &renderer, &journal)? == CliModeResult::Finish {
        return Ok(());
    }
    if clear_mode(&cli, &renderer, &mut journal)? == CliModeResult::Finish {
        return Ok(());
    }
    if read_mode(&cli, &renderer, &journal)? == CliModeResult::Finish {
        return Ok(());
    }
    write_mode(&cli, &renderer, &mut journal)?;
    Ok(())
}
