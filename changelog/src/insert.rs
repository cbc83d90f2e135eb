use crate::patterns::is_unreleased_heading;

const CHANGED_SUBHEADING: &str = "### Changed";
const H2_PREFIX: &str = "## [";
const BULLET_PREFIX: &str = "- ";

/// Inserts bullet entries into the `### Changed` subsection under
/// `## [Unreleased]`, creating the subsection when missing.
///
/// This is a mechanical append for recording a single change without a
/// version decision: no deduplication runs here. Documents without an
/// Unreleased heading, and empty entry lists, are returned unchanged.
#[must_use]
pub fn insert_entries(content: &str, entries: &[String]) -> String {
    if entries.is_empty() {
        return content.to_string();
    }

    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let Some(unreleased_idx) = find_unreleased_index(&lines) else {
        return content.to_string();
    };

    let next_h2_idx = find_next_h2_index(&lines, unreleased_idx);

    match find_changed_index(&lines, unreleased_idx, next_h2_idx) {
        Some(changed_idx) => {
            let insert_after = find_last_bullet(&lines, changed_idx, next_h2_idx);
            lines.splice(insert_after + 1..insert_after + 1, entries.iter().cloned());
        }
        None => {
            let mut block = vec![String::new(), CHANGED_SUBHEADING.to_string(), String::new()];
            block.extend(entries.iter().cloned());
            lines.splice(unreleased_idx + 1..unreleased_idx + 1, block);
        }
    }

    lines.join("\n")
}

fn find_unreleased_index(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| is_unreleased_heading(line))
}

fn find_next_h2_index(lines: &[String], start_idx: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start_idx + 1)
        .find(|(_, line)| line.trim().starts_with(H2_PREFIX))
        .map_or(lines.len(), |(idx, _)| idx)
}

fn find_changed_index(lines: &[String], start_idx: usize, end_idx: usize) -> Option<usize> {
    (start_idx + 1..end_idx).find(|&idx| lines[idx].trim() == CHANGED_SUBHEADING)
}

/// Walks past the heading to the end of its bullet run, skipping blank
/// lines, so new entries append after the last existing bullet.
fn find_last_bullet(lines: &[String], changed_idx: usize, end_idx: usize) -> usize {
    let mut insert_after = changed_idx;
    for idx in changed_idx + 1..end_idx {
        let trimmed = lines[idx].trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(BULLET_PREFIX) {
            insert_after = idx;
            continue;
        }
        break;
    }
    insert_after
}
