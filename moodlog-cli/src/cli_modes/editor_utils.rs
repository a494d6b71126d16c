use anyhow::{Result, bail};
use moodlog_core::Journal;
use std::{fs, process::Command};

pub fn resolve_editor(journal: &Journal) -> String {
    journal
        .config
        .editor
        .clone()
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on an empty temp file and returns what the user wrote.
pub fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("moodlog")
        .suffix(".md")
        .tempfile()?;

    let path = file.path().to_path_buf();
    tracing::debug!(editor = editor_cmd, path = %path.display(), "opening editor");
    let status = Command::new(editor_cmd).arg(&path).status()?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(fs::read_to_string(&path)?)
}
