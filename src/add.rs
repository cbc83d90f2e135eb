use crate::error::{CliError, Result};
use crate::ui;
use changelog::insert_entries;
use std::fs;
use std::path::Path;

pub fn execute(path: &str, entries: Vec<String>) -> Result<()> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(CliError::Other(format!("{} not found", path.display()))
            .with_context("Create a changelog file in the root of your project first"));
    }

    let content = fs::read_to_string(path)?;

    let bullets: Vec<String> = entries
        .into_iter()
        .map(|entry| {
            if entry.starts_with("- ") {
                entry
            } else {
                format!("- {entry}")
            }
        })
        .collect();

    let new_content = insert_entries(&content, &bullets);

    if new_content == content {
        ui::warning_message("No [Unreleased] heading found, changelog left unchanged");
        return Ok(());
    }

    fs::write(path, &new_content)?;
    ui::success_message(&format!(
        "Recorded {} new {} under Unreleased",
        bullets.len(),
        if bullets.len() == 1 { "entry" } else { "entries" }
    ));
    Ok(())
}
