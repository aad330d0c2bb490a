//! CLI command implementations

pub mod groups;
pub mod sync;
pub mod systems;
pub mod users;

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::output::Verbosity;
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Directory API key
    #[arg(short = 'k', long, global = true)]
    pub key: Option<String>,

    /// Path to a text file containing the API key
    #[arg(short = 'K', long = "key-file", global = true)]
    pub key_file: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Build an authenticated API client from default config and key flags
    pub fn client(&self) -> CliResult<ApiClient> {
        ApiClient::from_defaults(self.key.as_deref(), self.key_file.as_deref())
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_count(self.verbose)
    }
}
