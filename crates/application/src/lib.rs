//! Application services and ports for the Roster user directory.

#![forbid(unsafe_code)]

mod user_service;

pub use user_service::{UserRepository, UserService};
