use crate::error::{ChangelogError, Result};
use crate::patterns::VERSION_HEADING_PATTERN;
use crate::section::ChangeTally;
use semver::Version;

/// Version used for the first release when the changelog has no prior
/// released version.
#[must_use]
pub fn initial_release_version() -> Version {
    Version::new(1, 0, 0)
}

/// Finds the highest released version across all `## [<version>]` headings.
///
/// The `Unreleased` token is never treated as a version. A heading whose
/// token fails to parse aborts the whole pass with `InvalidVersionFormat`;
/// a document without any version heading reports `NoVersionFound` so
/// callers can switch to first-release handling.
pub fn find_latest_version(lines: &[String]) -> Result<Version> {
    let mut latest: Option<Version> = None;

    for line in lines {
        if let Some(captures) = VERSION_HEADING_PATTERN.captures(line) {
            let token = &captures[1];
            if token == "Unreleased" {
                continue;
            }

            let version = Version::parse(token)
                .map_err(|_| ChangelogError::InvalidVersionFormat(token.to_string()))?;

            if latest.as_ref().is_none_or(|current| version > *current) {
                latest = Some(version);
            }
        }
    }

    latest.ok_or(ChangelogError::NoVersionFound)
}

/// Maps the post-deduplication tally to the next version. Major beats
/// minor beats patch; lower components reset per semver rules. An empty
/// tally is not releasable.
pub fn bump(current: &Version, tally: &ChangeTally) -> Result<Version> {
    if tally.major > 0 {
        Ok(Version::new(current.major + 1, 0, 0))
    } else if tally.minor > 0 {
        Ok(Version::new(current.major, current.minor + 1, 0))
    } else if tally.patch > 0 {
        Ok(Version::new(current.major, current.minor, current.patch + 1))
    } else {
        Err(ChangelogError::NoChangesInUnreleased)
    }
}
