//! User reconciliation pass

use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::datafile::{GroupKind, UserEntry};
use crate::models::user::CreateUserRequest;
use crate::sync::plan::plan_users;
use crate::sync::report::{SyncAction, SyncReport};
use crate::sync::SyncOptions;
use std::collections::HashSet;

/// Reconcile remote users against the local definitions.
///
/// After each live creation the new user is bound to `default_group` (a
/// user group looked up by name). A default group that does not exist
/// remotely skips the binding; a user that cannot be resolved after its
/// own creation is a hard not-found error. Bind messages are live-mode
/// output only, so the returned report is identical between dry-run and
/// live runs.
pub async fn sync_users(
    client: &ApiClient,
    local: &[UserEntry],
    default_group: &str,
    opts: &SyncOptions,
) -> CliResult<SyncReport> {
    let remote = client.list_all_users().await?;

    if opts.verbosity.is_debug() {
        let usernames: Vec<&str> = remote.iter().map(|u| u.username.as_str()).collect();
        println!("remote users: {}", usernames.join(","));
    }

    let actions = plan_users(local, &remote);

    if opts.verbosity.is_verbose() {
        let remote_usernames: HashSet<&str> = remote.iter().map(|u| u.username.as_str()).collect();
        let remote_emails: HashSet<&str> = remote.iter().map(|u| u.email.as_str()).collect();
        for user in local {
            if remote_usernames.contains(user.username.as_str())
                || remote_emails.contains(user.email.as_str())
            {
                println!("{} user already exists", user.username);
            }
        }
    }

    for action in &actions {
        println!("{}", action.line());

        if !opts.dry_run {
            match action {
                SyncAction::CreateUser(entry) => {
                    client.create_user(&CreateUserRequest::from(entry)).await?;

                    if let Some(group) = client.find_group(default_group, GroupKind::User).await? {
                        let user_id = client.get_user_id(&entry.username).await?;
                        println!("bind {} to group: {}", user_id, group.id);
                        client.bind_user_to_group(user_id, group.id).await?;
                    }
                }
                SyncAction::RemoveUser { id, .. } => {
                    client.delete_user(*id).await?;
                }
                _ => {}
            }
        }
    }

    Ok(SyncReport::new(actions))
}
