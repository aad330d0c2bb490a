//! Group reconciliation pass

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::datafile::GroupEntry;
use crate::sync::plan::plan_groups;
use crate::sync::report::{SyncAction, SyncReport};
use crate::sync::SyncOptions;
use std::collections::HashSet;

/// Reconcile remote groups against the local definitions.
///
/// Fetches the full remote group set, plans the set difference, prints one
/// line per action, and applies the mutations unless dry-run is active.
/// Creations and deletions are independent of each other; no ordering is
/// guaranteed between them. The first failed mutation aborts the rest of
/// the pass.
pub async fn sync_groups(
    client: &ApiClient,
    local: &[GroupEntry],
    opts: &SyncOptions,
) -> CliResult<SyncReport> {
    let remote = client.list_all_groups().await?;

    if opts.verbosity.is_debug() {
        let names: Vec<&str> = remote.iter().map(|g| g.name.as_str()).collect();
        println!("remote groups: {}", names.join(","));
    }

    let actions = plan_groups(local, &remote)?;

    if opts.verbosity.is_verbose() {
        let remote_names: HashSet<&str> = remote.iter().map(|g| g.name.as_str()).collect();
        for group in local {
            if remote_names.contains(group.name.as_str()) {
                println!("{} group already exists", group.name);
            }
        }
    }

    for action in &actions {
        println!("{}", action.line());

        if !opts.dry_run {
            match action {
                SyncAction::CreateGroup { name, kind } => {
                    client.create_group(name, *kind).await?;
                }
                SyncAction::RemoveGroup { id, kind, .. } => {
                    client.delete_group(*id, *kind).await?;
                }
                _ => {}
            }
        }
    }

    Ok(SyncReport::new(actions))
}
