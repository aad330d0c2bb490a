//! Sync reconciliation core
//!
//! Reconciles a local declarative data file against remote directory state:
//! groups first, then users. Each pass fetches a fresh remote snapshot,
//! computes the set difference against the local definitions, reports one
//! line per planned action, and applies creations and removals unless
//! dry-run is active.
//!
//! Matched entities are left untouched: sync is not an upsert, and no
//! attribute diffing happens. A mutation failure aborts the remaining pass
//! and leaves remote state partially applied; there is no rollback.

mod groups;
mod plan;
mod report;
mod users;

pub use groups::sync_groups;
pub use plan::{plan_groups, plan_users};
pub use report::{SyncAction, SyncReport};
pub use users::sync_users;

use crate::output::Verbosity;

/// Options threaded through each reconciliation pass
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report planned actions without issuing any mutating call
    pub dry_run: bool,
    /// Output verbosity for progress notes
    pub verbosity: Verbosity,
}
