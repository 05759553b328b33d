//! Service layer for Tender.
//!
//! Pure queries over an immutable dataset snapshot, plus the session
//! boundary:
//! - Search (project filtering and tag extraction)
//! - Bids (per-project and per-freelancer queries, amount summaries)
//! - Recommend (skill-based project recommendations)
//! - Dashboard (client and freelancer aggregates)
//! - Messaging (project threads and unread counts)
//! - Auth (login and registration against the snapshot)

mod auth;
mod bids;
mod dashboard;
mod messaging;
mod recommend;
mod search;

pub use auth::{login, register, RegisteredUser};
pub use bids::{
    bid_for, bid_project_ids, freelancer_bids, project_bids, summarize_amounts, AmountSpread,
    BidSummary,
};
pub use dashboard::{
    client_dashboard, client_projects, freelancer_dashboard, ClientDashboard, FreelancerDashboard,
};
pub use messaging::{project_thread, unread_count};
pub use recommend::recommend_projects;
pub use search::{extract_tags, filter_projects, ProjectQuery, StatusFilter};
