use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{CRISIS_RESOURCES, Journal};

/// `--path` and `--resources`: print and exit, nothing is stored.
pub fn info_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if cli.path {
        renderer.print_info(&format!("{}", journal.store().path().display()));
        return Ok(CliModeResult::Finish);
    }
    if cli.resources {
        renderer.print_md("# Crisis support");
        renderer.print_resources(CRISIS_RESOURCES);
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}
