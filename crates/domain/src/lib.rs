//! Domain types for the Roster user directory.

#![forbid(unsafe_code)]

mod user;

pub use user::{User, UserFilters, UserId};
