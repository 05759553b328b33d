//! Bid model: a freelancer's proposal against a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
    Withdrawn,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
            BidStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(BidStatus::Pending),
            "accepted" => Some(BidStatus::Accepted),
            "rejected" => Some(BidStatus::Rejected),
            "withdrawn" => Some(BidStatus::Withdrawn),
            _ => None,
        }
    }
}

/// A freelancer's proposal on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Bid {
    pub id: String,
    pub project_id: String,
    pub freelancer_id: String,
    /// Whole dollars, always positive.
    pub amount: u32,
    /// Promised delivery time in days, always positive.
    pub delivery_days: u32,
    pub proposal: String,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    /// Build a new pending bid from validated form data.
    pub fn from_draft(draft: ValidatedBid, project_id: String, freelancer_id: String) -> Self {
        Self {
            id: super::new_id(),
            project_id,
            freelancer_id,
            amount: draft.amount,
            delivery_days: draft.delivery_days,
            proposal: draft.proposal,
            status: BidStatus::Pending,
            created_at: super::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == BidStatus::Pending
    }

    pub fn is_accepted(&self) -> bool {
        self.status == BidStatus::Accepted
    }
}

/// Bid fields that have passed form validation.
#[derive(Debug, Clone)]
pub struct ValidatedBid {
    pub amount: u32,
    pub delivery_days: u32,
    pub proposal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(BidStatus::from_str("withdrawn"), Some(BidStatus::Withdrawn));
        assert_eq!(BidStatus::from_str("Accepted"), Some(BidStatus::Accepted));
        assert_eq!(BidStatus::from_str("open"), None);
    }

    #[test]
    fn test_from_draft_starts_pending() {
        let bid = Bid::from_draft(
            ValidatedBid {
                amount: 1200,
                delivery_days: 14,
                proposal: "proposal".into(),
            },
            "p1".into(),
            "f1".into(),
        );
        assert!(bid.is_pending());
        assert_eq!(bid.project_id, "p1");
        assert_eq!(bid.freelancer_id, "f1");
    }
}
