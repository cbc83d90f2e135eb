use crate::section::{Category, Sections};
use chrono::NaiveDate;
use semver::Version;

/// Emits the canonical replacement block for one release pass: a fresh
/// empty `## [Unreleased]` heading followed by the dated version section.
/// Empty categories are omitted; entries are sorted lexically as a final
/// canonicalization step, independent of dedup survivor order.
#[must_use]
pub fn make_new_sections(sections: &Sections, version: &Version, today: NaiveDate) -> Vec<String> {
    let mut block = release_block_header(version, today);

    for category in Category::RENDER_ORDER {
        let entries = sections.get(category);
        if entries.is_empty() {
            continue;
        }

        let mut sorted = entries.to_vec();
        sorted.sort();

        block.push(format!("### {}", category.name()));
        block.push(String::new());
        block.extend(sorted);
        block.push(String::new());
    }

    block
}

/// First-release fallback for unreleased content without recognized
/// category headings: the buffered lines are kept verbatim under a
/// synthesized version heading instead of being discarded.
#[must_use]
pub fn make_new_sections_from_unreleased(
    unreleased: &[String],
    version: &Version,
    today: NaiveDate,
) -> Vec<String> {
    let mut block = release_block_header(version, today);
    block.extend(
        unreleased
            .iter()
            .filter(|line| !line.contains("[Unreleased]"))
            .cloned(),
    );
    block
}

fn release_block_header(version: &Version, today: NaiveDate) -> Vec<String> {
    vec![
        "## [Unreleased]".to_string(),
        String::new(),
        format!("## [{version}] - {}", today.format("%Y-%m-%d")),
        String::new(),
    ]
}
