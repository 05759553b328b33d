//! Dashboard aggregates for clients and freelancers.

use crate::dataset::Dataset;
use crate::models::{Project, ProjectStatus};

use super::bids::freelancer_bids;

/// Headline numbers for a client's dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDashboard {
    pub total_projects: usize,
    /// Projects not yet completed.
    pub active_projects: usize,
    /// Bids received across all of the client's projects.
    pub bids_received: usize,
    /// Mean of per-project budget midpoints, 0 when there are no projects.
    pub average_budget: f64,
}

/// Headline numbers for a freelancer's dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FreelancerDashboard {
    pub pending_bids: usize,
    /// Of the projects the freelancer bid on, how many are in progress.
    pub in_progress_projects: usize,
    /// Of the projects the freelancer bid on, how many are completed.
    pub completed_projects: usize,
    /// Sum of accepted bid amounts.
    pub total_earnings: u64,
}

/// A client's own projects, newest first.
pub fn client_projects<'a>(data: &'a Dataset, client_id: &str) -> Vec<&'a Project> {
    let mut own: Vec<&Project> = data
        .projects
        .iter()
        .filter(|p| p.client_id == client_id)
        .collect();
    own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    own
}

pub fn client_dashboard(data: &Dataset, client_id: &str) -> ClientDashboard {
    let own = client_projects(data, client_id);

    let bids_received = data
        .bids
        .iter()
        .filter(|b| own.iter().any(|p| p.id == b.project_id))
        .count();

    let average_budget = if own.is_empty() {
        0.0
    } else {
        let total: f64 = own.iter().map(|p| p.budget.midpoint()).sum();
        total / own.len() as f64
    };

    ClientDashboard {
        total_projects: own.len(),
        active_projects: own.iter().filter(|p| p.status != ProjectStatus::Completed).count(),
        bids_received,
        average_budget,
    }
}

pub fn freelancer_dashboard(data: &Dataset, freelancer_id: &str) -> FreelancerDashboard {
    let own = freelancer_bids(&data.bids, freelancer_id);

    // Projects this freelancer has bid on
    let bid_projects: Vec<&Project> = own
        .iter()
        .filter_map(|b| data.project(&b.project_id))
        .collect();

    FreelancerDashboard {
        pending_bids: own.iter().filter(|b| b.is_pending()).count(),
        in_progress_projects: bid_projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count(),
        completed_projects: bid_projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
        total_earnings: own
            .iter()
            .filter(|b| b.is_accepted())
            .map(|b| b.amount as u64)
            .sum(),
    }
}
