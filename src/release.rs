use crate::error::{CliError, Result};
use crate::ui;
use changelog::Changelog;
use chrono::Local;
use std::fs;
use std::path::Path;

pub fn execute(path: &str, dry_run: bool, verbose: bool) -> Result<()> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(CliError::Other(format!("{} not found", path.display()))
            .with_context("Create a changelog file in the root of your project first"));
    }

    let content = fs::read_to_string(path)?;
    let document = Changelog::from_content(&content);

    if verbose {
        println!("Read {} lines from {}", document.lines().len(), path.display());
    }

    if document.is_unreleased_empty()? {
        return Err(CliError::Other(
            "Nothing to release, the unreleased section is empty".to_string(),
        ));
    }

    let today = Local::now().date_naive();
    let (version, new_lines) = document.process(today)?;

    let mut new_content = new_lines.join("\n");
    if content.ends_with('\n') {
        new_content.push('\n');
    }

    if dry_run {
        ui::warning_message("Dry run, changelog not written");
        print!("{new_content}");
    } else {
        fs::write(path, &new_content)?;
        ui::success_message(&format!("Changelog updated at {}", path.display()));
    }

    ui::info_message(&format!("Next version: {version}"));
    Ok(())
}
