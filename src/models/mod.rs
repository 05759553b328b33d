//! Data models for Tender.
//!
//! Defines the core types used throughout the system: users, projects,
//! bids, and messages. All records are immutable value types; the query
//! services never create or modify them.

mod bid;
mod message;
mod project;
mod user;

pub use bid::*;
pub use message::*;
pub use project::*;
pub use user::*;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new UUID
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
