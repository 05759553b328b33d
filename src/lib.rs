//! Tender - Freelance Marketplace Core
//!
//! Typed records and pure query services for a client/freelancer
//! marketplace: project search and filtering, bid tracking, skill-based
//! recommendations, and dashboard aggregates, all over an immutable
//! in-memory snapshot. The session is an explicit value persisted to a
//! local file between runs.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;

pub use config::Config;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use session::{Session, SessionStore};
