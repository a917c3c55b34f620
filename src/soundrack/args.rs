use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "soundrack")]
#[command(about = "Catalog and resolve named audio clips", long_about = None)]
#[command(version, long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " ",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE")
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Asset root directory (falls back to $SOUNDRACK_ROOT, then the
    /// per-user data directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a clip or group track and print its path
    #[command(alias = "p")]
    Play {
        /// Clip or group name (matched case-insensitively)
        name: String,

        /// Track number within a group, starting at 1
        #[arg(default_value_t = 1)]
        track: usize,
    },

    /// List the catalog
    #[command(alias = "ls")]
    List {
        /// Show every nested clip, not just the top level
        #[arg(long)]
        expand: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (extensions, sort)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
