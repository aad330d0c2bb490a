//! dircli - command-line client for the dircli directory API
//!
//! The crate is a thin CLI over the directory's REST API: subcommands for
//! user, group, and system management, plus a bulk `sync` command that
//! reconciles a local declarative data file against remote state. The
//! reconciliation core lives in [`sync`]; everything else is glue around
//! the [`api::ApiClient`] collaborator.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod sync;
