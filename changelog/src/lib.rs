//! Changelog processing engine for Keep-a-Changelog documents.
//!
//! Reads a changelog as lines, classifies the pending `## [Unreleased]`
//! entries into the six standard categories, removes exact and
//! near-duplicate entries, decides the next semantic version from the
//! surviving change magnitudes, and re-renders the document with a new
//! dated section. A separate entry point appends bullet entries under
//! Unreleased without any version decision.
//!
//! The engine is pure text transformation: no I/O, no clock of its own
//! (dates are injected), no shared state between invocations.

pub mod dedup;
pub mod error;
pub mod insert;
pub mod patterns;
pub mod processor;
pub mod render;
pub mod section;
pub mod version;

pub use dedup::deduplicate_entries;
pub use error::{ChangelogError, Result};
pub use insert::insert_entries;
pub use processor::Changelog;
pub use section::{Category, ChangeTally, BREAKING_CHANGE_MARKER};
pub use version::{find_latest_version, initial_release_version};

// Re-export semver for users of this library
pub use semver::Version;
