use super::CliModeResult;
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{Journal, stats};

pub fn read_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if !(cli.history || cli.stats || cli.chart || cli.today) {
        return Ok(CliModeResult::NothingToDo);
    }

    if cli.today {
        renderer.print_today(&journal.today());
    }
    if cli.history {
        let entries = journal.history(cli.range, cli.source);
        if !entries.is_empty() {
            renderer.print_info(&format!(
                "{} entries found ({}).",
                entries.len(),
                cli.range.label()
            ));
        }
        renderer.print_entries(&entries);
    }
    if cli.stats {
        renderer.print_summary(&journal.stats(cli.range), cli.range);
    }
    if cli.chart {
        let entries = journal.history(cli.range, None);
        renderer.print_chart(&stats::daily_series(&entries));
    }
    Ok(CliModeResult::Finish)
}
