//! Sync CLI command
//!
//! Loads the declarative data file, confirms with the operator, then runs
//! the group reconciliation pass followed by the user reconciliation pass.

use crate::commands::GlobalArgs;
use crate::error::{CliError, CliResult};
use crate::models::datafile::load_sync_file;
use crate::sync::{sync_groups, sync_users, SyncOptions};
use clap::Args;
use dialoguer::Confirm;
use std::path::PathBuf;

/// Sync the directory with a data file
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// The data file (YAML or JSON)
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Do not do anything, only show what will happen
    #[arg(long)]
    pub dry_run: bool,

    /// Assume yes to all questions
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// User group that newly created users are bound to
    #[arg(long, default_value = "staff")]
    pub default_group: String,
}

/// Execute the sync command
pub async fn execute(args: SyncArgs, global: &GlobalArgs) -> CliResult<()> {
    // Local validation happens before any remote call: a malformed file or
    // an entry missing a required field aborts here.
    let data = load_sync_file(&args.file)?;

    if !args.dry_run && !args.yes {
        if !atty::is(atty::Stream::Stdin) {
            return Err(CliError::Validation(
                "Cannot confirm in non-interactive mode. Use --yes to skip confirmation."
                    .to_string(),
            ));
        }

        let confirm = Confirm::new()
            .with_prompt("Do you want to continue?")
            .default(false)
            .interact()?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let client = global.client()?;
    let opts = SyncOptions {
        dry_run: args.dry_run,
        verbosity: global.verbosity(),
    };

    if opts.dry_run {
        println!("Dry run - no changes will be made.");
    }

    let group_report = sync_groups(&client, &data.groups, &opts).await?;
    let user_report = sync_users(&client, &data.users, &args.default_group, &opts).await?;

    if group_report.is_empty() && user_report.is_empty() {
        println!("Nothing to do. Directory matches {}.", args.file.display());
    } else {
        println!(
            "Summary: {} to create, {} to remove",
            group_report.created() + user_report.created(),
            group_report.removed() + user_report.removed()
        );
    }

    Ok(())
}
