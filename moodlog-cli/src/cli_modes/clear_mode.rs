use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::Journal;

pub fn clear_mode(cli: &Cli, renderer: &Renderer, journal: &mut Journal) -> Result<CliModeResult> {
    if !cli.clear {
        return Ok(CliModeResult::NothingToDo);
    }
    if !cli.yes {
        renderer.print_warning("This deletes every entry for good. Run again with `--clear --yes`.");
        return Ok(CliModeResult::Finish);
    }
    let count = journal.store().entries().len();
    journal.clear()?;
    renderer.print_info(&format!("Deleted {count} entries."));
    Ok(CliModeResult::Finish)
}
