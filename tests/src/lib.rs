#[cfg(test)]
mod tests {
    use changelog::{insert_entries, Changelog, Version};
    use chrono::NaiveDate;

    fn release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn insert_then_release_round_trip() {
        let content = "# Changelog\n\n## [Unreleased]\n\n## [1.0.0] - 2024-01-01\n\n### Added\n\n- initial release\n";

        // Record a change the way the automation bridge would.
        let with_entry = insert_entries(
            content,
            &["- updated dependency `tokio` to 1.38.0".to_string()],
        );
        assert!(with_entry.contains("### Changed"));

        // Then cut a release over the amended document.
        let document = Changelog::from_content(&with_entry);
        let (version, lines) = document.process(release_date()).unwrap();

        assert_eq!(version, Version::new(1, 0, 1));
        assert!(lines.contains(&"## [1.0.1] - 2024-06-15".to_string()));
        assert!(lines.contains(&"- updated dependency `tokio` to 1.38.0".to_string()));
    }

    #[test]
    fn inserting_twice_survives_release_dedup_only_once() {
        let content = "# Changelog\n\n## [Unreleased]\n\n## [1.2.3] - 2024-02-02\n";

        let entry = "- bumped the base image to 1.26.0".to_string();
        let once = insert_entries(content, &[entry.clone()]);
        let twice = insert_entries(&once, &[entry.clone()]);
        assert_eq!(twice.matches(entry.as_str()).count(), 2);

        let (version, lines) = Changelog::from_content(&twice)
            .process(release_date())
            .unwrap();

        assert_eq!(version, Version::new(1, 2, 4));
        let survivors = lines.iter().filter(|l| *l == &entry).count();
        assert_eq!(survivors, 1);
    }
}
