//! Reconciliation actions and the per-pass report

use crate::models::datafile::{GroupKind, UserEntry};
use uuid::Uuid;

/// A single planned create or remove operation
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    CreateGroup {
        name: String,
        kind: GroupKind,
    },
    RemoveGroup {
        id: Uuid,
        name: String,
        kind: GroupKind,
    },
    CreateUser(UserEntry),
    RemoveUser {
        id: Uuid,
        username: String,
        email: String,
    },
}

impl SyncAction {
    /// The human-readable report line for this action
    pub fn line(&self) -> String {
        match self {
            SyncAction::CreateGroup { name, kind } => format!("create {kind} group: {name}"),
            SyncAction::RemoveGroup { name, kind, .. } => format!("remove {kind} group: {name}"),
            SyncAction::CreateUser(entry) => format!("create user: {}", entry.username),
            SyncAction::RemoveUser { username, .. } => format!("remove user: {username}"),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(
            self,
            SyncAction::CreateGroup { .. } | SyncAction::CreateUser(_)
        )
    }
}

/// Ordered record of the actions one reconciliation pass planned.
///
/// The same report is produced whether or not dry-run was active; dry-run
/// suppresses only the mutating calls.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    pub fn new(actions: Vec<SyncAction>) -> Self {
        Self { actions }
    }

    /// Report lines in action order
    pub fn lines(&self) -> Vec<String> {
        self.actions.iter().map(SyncAction::line).collect()
    }

    pub fn created(&self) -> usize {
        self.actions.iter().filter(|a| a.is_create()).count()
    }

    pub fn removed(&self) -> usize {
        self.actions.iter().filter(|a| !a.is_create()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
