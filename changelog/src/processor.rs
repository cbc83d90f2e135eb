use crate::error::{ChangelogError, Result};
use crate::patterns::{mentions_unreleased, BULLET_ENTRY_PATTERN};
use crate::render::{make_new_sections, make_new_sections_from_unreleased};
use crate::section::{classify_unreleased, fix_section_headings, ChangeTally};
use crate::version::{bump, find_latest_version, initial_release_version};
use chrono::NaiveDate;
use semver::Version;

/// A Keep-a-Changelog formatted document held as an ordered sequence of
/// lines. Processing never mutates the document in place; a pass either
/// yields a complete new line sequence or fails.
pub struct Changelog {
    lines: Vec<String>,
}

impl Changelog {
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Builds a changelog from a full document string.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        Self::new(content.lines().map(str::to_string).collect())
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Processes the document for release: classifies, deduplicates and
    /// versions the unreleased block, returning the next version and the
    /// reassembled document.
    ///
    /// The date goes into the new version heading; callers inject it so
    /// tests can supply a fixed clock.
    ///
    /// # Errors
    ///
    /// `InvalidVersionFormat` when a version heading fails to parse,
    /// `NoChangesInUnreleased` when the unreleased block holds no entries
    /// after deduplication.
    pub fn process(&self, today: NaiveDate) -> Result<(Version, Vec<String>)> {
        let latest = match find_latest_version(&self.lines) {
            Ok(version) => version,
            Err(ChangelogError::NoVersionFound) => return self.process_new(today),
            Err(err) => return Err(err),
        };

        let latest_heading = format!("## [{latest}]");
        let mut next_version = latest;
        let mut new_content = Vec::with_capacity(self.lines.len());
        let mut unreleased_block: Vec<String> = Vec::new();
        let mut inside_unreleased = false;

        for line in &self.lines {
            if mentions_unreleased(line) {
                inside_unreleased = true;
            } else if line.starts_with(&latest_heading) {
                inside_unreleased = false;
                if !unreleased_block.is_empty() {
                    let (rendered, bumped) =
                        update_section(&mut unreleased_block, &next_version, today)?;
                    new_content.extend(rendered);
                    unreleased_block.clear();
                    next_version = bumped;
                }
            }

            if inside_unreleased {
                unreleased_block.push(line.clone());
            } else {
                new_content.push(line.clone());
            }
        }

        Ok((next_version, new_content))
    }

    /// First-release path for documents without any released version: the
    /// unreleased block, buffered to end of document, becomes the 1.0.0
    /// section. Content without recognized category headings is preserved
    /// verbatim rather than discarded.
    fn process_new(&self, today: NaiveDate) -> Result<(Version, Vec<String>)> {
        let mut new_content = Vec::with_capacity(self.lines.len());
        let mut unreleased_block: Vec<String> = Vec::new();
        let mut inside_unreleased = false;

        for line in &self.lines {
            if mentions_unreleased(line) {
                inside_unreleased = true;
            }

            if inside_unreleased {
                unreleased_block.push(line.clone());
            } else {
                new_content.push(line.clone());
            }
        }

        let initial = initial_release_version();

        if !unreleased_block.is_empty() {
            fix_section_headings(&mut unreleased_block);
            let (mut sections, _) = classify_unreleased(&unreleased_block);
            sections.deduplicate();

            if sections.is_empty() {
                new_content.extend(make_new_sections_from_unreleased(
                    &unreleased_block,
                    &initial,
                    today,
                ));
            } else {
                new_content.extend(make_new_sections(&sections, &initial, today));
            }
        }

        Ok((initial, new_content))
    }

    /// Reports whether the unreleased span holds any bullet entry. The
    /// span runs from the unreleased heading to the latest-version heading,
    /// or to end of document when no version exists yet.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidVersionFormat` from the version locator.
    pub fn is_unreleased_empty(&self) -> Result<bool> {
        let latest_heading = match find_latest_version(&self.lines) {
            Ok(version) => Some(format!("## [{version}]")),
            Err(ChangelogError::NoVersionFound) => None,
            Err(err) => return Err(err),
        };

        let mut inside_unreleased = false;
        for line in &self.lines {
            if mentions_unreleased(line) {
                inside_unreleased = true;
            } else if let Some(heading) = &latest_heading {
                if line.starts_with(heading) {
                    inside_unreleased = false;
                }
            }

            if inside_unreleased && BULLET_ENTRY_PATTERN.is_match(line) {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Turns one buffered unreleased block into its rendered release section:
/// normalize headings, classify, deduplicate per category, recount the
/// tally, bump the version and render.
fn update_section(
    block: &mut [String],
    current: &Version,
    today: NaiveDate,
) -> Result<(Vec<String>, Version)> {
    fix_section_headings(block);

    let (mut sections, _) = classify_unreleased(block);
    sections.deduplicate();

    let tally = ChangeTally::recount(&sections);
    let next = bump(current, &tally)?;

    Ok((make_new_sections(&sections, &next, today), next))
}
