use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{cli::Cli, render::Renderer};
use anyhow::Result;
use moodlog_core::{Journal, JournalError};

pub fn write_mode(cli: &Cli, renderer: &Renderer, journal: &mut Journal) -> Result<CliModeResult> {
    let text = if !cli.text.is_empty() {
        cli.text.join(" ")
    } else if cli.mood.is_some() {
        // a manual mood needs no note
        String::new()
    } else {
        let editor = resolve_editor(journal);
        create_editor_buffer(&editor)?
    };
    let text = text.trim();

    let result = match &cli.mood {
        Some(mood) => journal.save_manual(mood, text, cli.date),
        None => journal.analyze(text),
    };

    match result {
        Ok(outcome) => renderer.print_outcome(&outcome),
        Err(error) => match error.downcast_ref::<JournalError>() {
            Some(JournalError::EmptyInput) => {
                renderer.print_warning("No entry to save, because no text was received.");
            }
            None => return Err(error),
        },
    }
    Ok(CliModeResult::Finish)
}
