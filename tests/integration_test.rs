#[cfg(test)]
mod tests {
    use changelog::{Changelog, ChangelogError, Version};
    use chrono::NaiveDate;

    fn release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn to_lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    #[test]
    fn full_release_pass_over_a_messy_document() {
        // Non-canonical heading depths, copy-pasted duplicates, a
        // paraphrased dependency bump pair and a breaking change.
        let content = "\
# Changelog

All notable changes to this project will be documented in this file.

## [Unreleased]

#### Added

- added webhook retries with exponential backoff
- added webhook retries with exponential backoff

### Changed

- **BREAKING CHANGE:** renamed the `sync` command to `pull`
- updated dependency `serde` from 1.0.100 to 1.0.200
- updated dependency `serde` from 1.0.100 to 1.0.210

### Fixed

- fixed panic on empty configuration files

## [1.4.2] - 2024-03-10

### Fixed

- fixed locale handling

## [1.0.0] - 2023-11-01

### Added

- initial release
";

        let document = Changelog::new(to_lines(content));
        let (version, lines) = document.process(release_date()).unwrap();

        // The breaking change wins the bump decision.
        assert_eq!(version, Version::new(2, 0, 0));

        // A fresh empty Unreleased heading sits above the new section.
        let unreleased_idx = lines.iter().position(|l| l == "## [Unreleased]").unwrap();
        let new_release_idx = lines
            .iter()
            .position(|l| l == "## [2.0.0] - 2024-06-15")
            .unwrap();
        let old_release_idx = lines
            .iter()
            .position(|l| l == "## [1.4.2] - 2024-03-10")
            .unwrap();
        assert!(unreleased_idx < new_release_idx);
        assert!(new_release_idx < old_release_idx);

        // Exact duplicate collapsed.
        let webhook_count = lines
            .iter()
            .filter(|l| l.contains("webhook retries"))
            .count();
        assert_eq!(webhook_count, 1);

        // Paraphrased pair resolved toward the higher version.
        assert!(lines.contains(&"- updated dependency `serde` from 1.0.100 to 1.0.210".to_string()));
        assert!(!lines.contains(&"- updated dependency `serde` from 1.0.100 to 1.0.200".to_string()));

        // The non-canonical "#### Added" heading was normalized.
        assert!(lines.contains(&"### Added".to_string()));

        // Released history is untouched.
        assert!(lines.contains(&"- fixed locale handling".to_string()));
        assert!(lines.contains(&"- initial release".to_string()));
    }

    #[test]
    fn first_release_of_a_brand_new_changelog() {
        let content = "\
# Changelog

## [Unreleased]

### Added

- bootstrapped the project

### Fixed

- fixed the ci pipeline
";

        let document = Changelog::new(to_lines(content));
        let (version, lines) = document.process(release_date()).unwrap();

        assert_eq!(version, Version::new(1, 0, 0));
        assert!(lines.contains(&"## [1.0.0] - 2024-06-15".to_string()));
        assert!(lines.contains(&"- bootstrapped the project".to_string()));
        assert!(lines.contains(&"- fixed the ci pipeline".to_string()));

        let unreleased_idx = lines.iter().position(|l| l == "## [Unreleased]").unwrap();
        let release_idx = lines
            .iter()
            .position(|l| l == "## [1.0.0] - 2024-06-15")
            .unwrap();
        assert!(unreleased_idx < release_idx);
    }

    #[test]
    fn empty_unreleased_section_refuses_to_release() {
        let content = "\
# Changelog

## [Unreleased]

## [0.3.0] - 2024-04-01

### Added

- some released feature
";

        let document = Changelog::new(to_lines(content));
        let result = document.process(release_date());

        assert!(matches!(result, Err(ChangelogError::NoChangesInUnreleased)));
    }

    #[test]
    fn consecutive_releases_compose() {
        let content = "\
# Changelog

## [Unreleased]

### Added

- feature one

## [1.0.0] - 2024-01-01

### Added

- initial release
";

        let document = Changelog::new(to_lines(content));
        let (first, lines) = document.process(release_date()).unwrap();
        assert_eq!(first, Version::new(1, 1, 0));

        // Append a fix to the fresh Unreleased section and release again.
        let next_content = changelog::insert_entries(
            &lines.join("\n"),
            &["- fixed a regression in feature one".to_string()],
        );
        let next_document = Changelog::from_content(&next_content);
        let (second, final_lines) = next_document
            .process(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
            .unwrap();

        assert_eq!(second, Version::new(1, 1, 1));
        assert!(final_lines.contains(&"## [1.1.1] - 2024-07-01".to_string()));
        assert!(final_lines.contains(&"## [1.1.0] - 2024-06-15".to_string()));
        assert!(final_lines.contains(&"## [1.0.0] - 2024-01-01".to_string()));
    }
}
