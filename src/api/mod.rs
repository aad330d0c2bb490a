//! API client modules for the directory service

mod client;
mod groups;
mod systems;
mod users;

pub use client::{ApiClient, PAGE_LIMIT};
