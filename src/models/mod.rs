//! Data models for the dircli CLI

pub mod datafile;
pub mod group;
pub mod system;
pub mod user;

pub use datafile::{GroupEntry, GroupKind, SyncFile, UserEntry};
pub use group::{CreateGroupRequest, GroupMemberRequest, GroupSummary};
pub use system::{SystemListResponse, SystemSummary, UpdateSystemRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserListResponse, UserSummary};
