use crate::dedup::deduplicate_entries;
use crate::patterns::CATEGORY_HEADING_PATTERN;

/// An entry carrying this literal marker forces a major version bump,
/// whatever category it is filed under.
pub const BREAKING_CHANGE_MARKER: &str = "- **BREAKING CHANGE:**";

/// The six canonical Keep-a-Changelog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Removed,
        Self::Fixed,
        Self::Security,
    ];

    /// Fixed emission order for rendered release sections.
    pub const RENDER_ORDER: [Self; 6] = [
        Self::Added,
        Self::Changed,
        Self::Deprecated,
        Self::Fixed,
        Self::Removed,
        Self::Security,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
        }
    }
}

/// Entry lines grouped by category, in insertion order.
#[derive(Debug, Default)]
pub struct Sections {
    entries: [Vec<String>; 6],
}

impl Sections {
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        &self.entries[category as usize]
    }

    fn push(&mut self, category: Category, line: String) {
        self.entries[category as usize].push(line);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    /// Deduplicates every category independently.
    pub fn deduplicate(&mut self) {
        for bucket in &mut self.entries {
            let kept = deduplicate_entries(std::mem::take(bucket));
            *bucket = kept;
        }
    }
}

/// Counters for entries that trigger a major, minor or patch bump.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChangeTally {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
}

impl ChangeTally {
    fn record(&mut self, category: Category, line: &str) {
        if line.starts_with(BREAKING_CHANGE_MARKER) {
            self.major += 1;
        } else if category == Category::Added {
            self.minor += 1;
        } else {
            self.patch += 1;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.patch == 0
    }

    /// Recounts the tally from already-deduplicated sections, so removed
    /// duplicates cannot inflate the bump decision.
    #[must_use]
    pub fn recount(sections: &Sections) -> Self {
        let mut tally = Self::default();
        for category in Category::ALL {
            for line in sections.get(category) {
                tally.record(category, line);
            }
        }
        tally
    }
}

/// Splits an unreleased block into category sections in one pass, tallying
/// the change magnitude of every classified line as it goes.
///
/// The current category switches on a trimmed-line `### <Name>` prefix,
/// case-sensitive. Lines seen before any category heading are dropped
/// silently.
#[must_use]
pub fn classify_unreleased(lines: &[String]) -> (Sections, ChangeTally) {
    let mut sections = Sections::default();
    let mut tally = ChangeTally::default();
    let mut current: Option<Category> = None;

    for line in lines {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("### ") {
            if let Some(category) = Category::ALL.into_iter().find(|c| rest.starts_with(c.name()))
            {
                current = Some(category);
            }
        }

        if let Some(category) = current {
            if !trimmed.is_empty() && trimmed != "-" && !trimmed.starts_with("##") {
                tally.record(category, line);
                sections.push(category, line.clone());
            }
        }
    }

    (sections, tally)
}

/// Rewrites any recognizable category heading, whatever its depth, to the
/// `### <name>` form the classifier expects.
pub fn fix_section_headings(lines: &mut [String]) {
    for line in lines.iter_mut() {
        if CATEGORY_HEADING_PATTERN.is_match(line) {
            *line = format!("### {}", line.replace('#', "").trim());
        }
    }
}
