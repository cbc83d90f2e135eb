use thiserror::Error;

/// Errors that can occur during a changelog processing pass
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("no version found in the changelog")]
    NoVersionFound,

    #[error("invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("no changes found in the unreleased section")]
    NoChangesInUnreleased,
}

impl ChangelogError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoVersionFound => {
                "No released version found in the changelog".to_string()
            }
            Self::InvalidVersionFormat(token) => {
                format!("Heading '[{token}]' is not a valid semantic version")
            }
            Self::NoChangesInUnreleased => {
                "The unreleased section has no entries to release".to_string()
            }
        }
    }
}

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;
