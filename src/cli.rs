use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relcut")]
#[command(
    author,
    version,
    about = "Automates release bookkeeping for Keep-a-Changelog files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cut a release: classify, deduplicate and version the unreleased section
    Release {
        /// Path to the changelog file
        #[clap(short, long, default_value = "CHANGELOG.md")]
        path: String,

        /// Print the processed document instead of writing the file
        #[clap(long, default_value_t = false)]
        dry_run: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Record entries under the Changed subsection of Unreleased
    Add {
        /// Path to the changelog file
        #[clap(short, long, default_value = "CHANGELOG.md")]
        path: String,

        /// Entry text; a leading "- " bullet marker is added when missing
        #[clap(required = true)]
        entries: Vec<String>,
    },
}
