use crate::patterns::{BACKTICK_SPAN_PATTERN, EMBEDDED_VERSION_PATTERN};
use once_cell::sync::Lazy;
use semver::Version;
use std::collections::HashSet;

/// Minimum token overlap ratio for two entries to count as duplicates.
const OVERLAP_THRESHOLD: f64 = 0.6;

/// Common words stripped during tokenization for similarity comparison.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "to", "and", "all", "their", "its", "a", "an", "of", "in", "for", "with", "from",
        "by", "on", "is", "was", "are", "were", "be", "been", "being", "has", "have", "had",
        "that", "this", "it", "as",
    ]
    .into_iter()
    .collect()
});

struct EntryInfo {
    raw: String,
    tokens: Vec<String>,
    version: Option<Version>,
}

/// Strips a changelog entry down to its semantic core for comparison:
/// no bullet marker, no inline code, no version numbers, lower-cased,
/// single-spaced.
pub fn normalize_entry(entry: &str) -> String {
    let trimmed = entry.trim();
    let without_bullet = trimmed.strip_prefix("- ").unwrap_or(trimmed);
    let without_code = BACKTICK_SPAN_PATTERN.replace_all(without_bullet, "");
    let without_versions = EMBEDDED_VERSION_PATTERN.replace_all(&without_code, "");
    without_versions
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a normalized entry into significant words, dropping stop words
/// and single-character tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|word| word.len() > 1 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Finds the highest version mentioned in an entry's raw text, if any.
///
/// Prose versions are parsed loosely: a leading `v` is stripped and a
/// two-component `X.Y` reads as `X.Y.0`. Matches that still fail to parse
/// are skipped.
pub fn extract_max_version(entry: &str) -> Option<Version> {
    EMBEDDED_VERSION_PATTERN
        .find_iter(entry)
        .filter_map(|m| parse_loose_version(m.as_str()))
        .max()
}

fn parse_loose_version(text: &str) -> Option<Version> {
    let bare = text.strip_prefix('v').unwrap_or(text);
    if let Ok(version) = Version::parse(bare) {
        return Some(version);
    }
    Version::parse(&format!("{bare}.0")).ok()
}

/// Token overlap ratio between two entries: intersection size divided by
/// the smaller token count. Zero when either side has no tokens.
fn overlap_ratio(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set: HashSet<&str> = a.iter().map(String::as_str).collect();
    let intersection = b.iter().filter(|token| set.contains(token.as_str())).count();

    intersection as f64 / a.len().min(b.len()) as f64
}

/// Removes duplicate and semantically overlapping changelog entries,
/// preserving the original relative order of survivors.
///
/// Runs two passes: an exact pass over trimmed strings where the first
/// occurrence wins, then a single forward sweep comparing token sets of
/// every remaining pair. The removed mark is sticky and only checked at
/// loop entry, so an entry that loses inside its own inner loop keeps
/// eliminating later near-duplicates during that sweep.
pub fn deduplicate_entries(entries: Vec<String>) -> Vec<String> {
    if entries.len() <= 1 {
        return entries;
    }

    let mut seen = HashSet::with_capacity(entries.len());
    let mut unique = Vec::with_capacity(entries.len());
    for entry in entries {
        if seen.insert(entry.trim().to_string()) {
            unique.push(entry);
        }
    }

    if unique.len() <= 1 {
        return unique;
    }

    let infos: Vec<EntryInfo> = unique
        .into_iter()
        .map(|raw| EntryInfo {
            tokens: tokenize(&normalize_entry(&raw)),
            version: extract_max_version(&raw),
            raw,
        })
        .collect();

    let mut removed = vec![false; infos.len()];
    for i in 0..infos.len() {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..infos.len() {
            if removed[j] {
                continue;
            }

            if overlap_ratio(&infos[i].tokens, &infos[j].tokens) < OVERLAP_THRESHOLD {
                continue;
            }

            removed[pick_loser(&infos[i], &infos[j], i, j)] = true;
        }
    }

    infos
        .into_iter()
        .zip(removed)
        .filter(|(_, gone)| !gone)
        .map(|(info, _)| info.raw)
        .collect()
}

/// Decides which of two overlapping entries to remove: the one referencing
/// a lower version, else the one without a version, else the shorter one.
/// Equal on all counts, the second-encountered entry loses.
fn pick_loser(a: &EntryInfo, b: &EntryInfo, idx_a: usize, idx_b: usize) -> usize {
    match (&a.version, &b.version) {
        (Some(version_a), Some(version_b)) => {
            if version_a > version_b {
                return idx_b;
            }
            if version_b > version_a {
                return idx_a;
            }
        }
        (Some(_), None) => return idx_b,
        (None, Some(_)) => return idx_a,
        (None, None) => {}
    }

    if a.raw.len() != b.raw.len() {
        if a.raw.len() > b.raw.len() {
            return idx_b;
        }
        return idx_a;
    }

    idx_b
}
