//! Bid queries and amount summaries.

use std::collections::HashSet;

use crate::models::Bid;

/// Bids placed on one project, in input order.
pub fn project_bids<'a>(bids: &'a [Bid], project_id: &str) -> Vec<&'a Bid> {
    bids.iter().filter(|b| b.project_id == project_id).collect()
}

/// Bids placed by one freelancer, newest first.
pub fn freelancer_bids<'a>(bids: &'a [Bid], freelancer_id: &str) -> Vec<&'a Bid> {
    let mut own: Vec<&Bid> = bids
        .iter()
        .filter(|b| b.freelancer_id == freelancer_id)
        .collect();
    own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    own
}

/// The bid a freelancer placed on a project, if any. The UI expects at most
/// one per (project, freelancer) pair; with historical duplicates the
/// earliest-listed one wins.
pub fn bid_for<'a>(bids: &'a [Bid], project_id: &str, freelancer_id: &str) -> Option<&'a Bid> {
    bids.iter()
        .find(|b| b.project_id == project_id && b.freelancer_id == freelancer_id)
}

/// Ids of every project a freelancer has bid on.
pub fn bid_project_ids(bids: &[Bid], freelancer_id: &str) -> HashSet<String> {
    bids.iter()
        .filter(|b| b.freelancer_id == freelancer_id)
        .map(|b| b.project_id.clone())
        .collect()
}

/// Amount statistics over a project's bids.
///
/// `amounts` is `None` when there are no bids, so the mean and extrema of
/// an empty collection can never be read; callers branch on `count` (or the
/// option) before displaying them.
#[derive(Debug, Clone, PartialEq)]
pub struct BidSummary {
    pub count: usize,
    pub amounts: Option<AmountSpread>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountSpread {
    pub average: f64,
    pub min: u32,
    pub max: u32,
}

/// Summarize the amounts of an already-selected group of bids.
pub fn summarize_amounts(bids: &[&Bid]) -> BidSummary {
    let count = bids.len();
    if count == 0 {
        return BidSummary { count: 0, amounts: None };
    }

    let total: u64 = bids.iter().map(|b| b.amount as u64).sum();
    let min = bids.iter().map(|b| b.amount).min().unwrap_or(0);
    let max = bids.iter().map(|b| b.amount).max().unwrap_or(0);

    BidSummary {
        count,
        amounts: Some(AmountSpread {
            average: total as f64 / count as f64,
            min,
            max,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BidStatus, ValidatedBid};
    use chrono::{TimeZone, Utc};

    fn bid(id: &str, project_id: &str, freelancer_id: &str, amount: u32, day: u32) -> Bid {
        let mut b = Bid::from_draft(
            ValidatedBid {
                amount,
                delivery_days: 10,
                proposal: "p".into(),
            },
            project_id.into(),
            freelancer_id.into(),
        );
        b.id = id.into();
        b.created_at = Utc.with_ymd_and_hms(2023, 4, day, 0, 0, 0).unwrap();
        b
    }

    #[test]
    fn test_summary_matches_spread() {
        let bids = vec![
            bid("b1", "px", "f1", 100, 1),
            bid("b2", "px", "f2", 300, 2),
            bid("b3", "px", "f3", 200, 3),
        ];
        let selected = project_bids(&bids, "px");
        let summary = summarize_amounts(&selected);
        assert_eq!(summary.count, 3);
        let amounts = summary.amounts.unwrap();
        assert_eq!(amounts.average, 200.0);
        assert_eq!(amounts.min, 100);
        assert_eq!(amounts.max, 300);
    }

    #[test]
    fn test_summary_of_no_bids_has_no_amounts() {
        let summary = summarize_amounts(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.amounts.is_none());
    }

    #[test]
    fn test_freelancer_bids_newest_first() {
        let bids = vec![
            bid("b1", "p1", "f1", 100, 1),
            bid("b2", "p2", "f1", 100, 9),
            bid("b3", "p3", "f2", 100, 5),
            bid("b4", "p4", "f1", 100, 4),
        ];
        let own: Vec<&str> = freelancer_bids(&bids, "f1").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(own, vec!["b2", "b4", "b1"]);
    }

    #[test]
    fn test_bid_for_pair() {
        let bids = vec![bid("b1", "p1", "f1", 100, 1), bid("b2", "p1", "f2", 150, 2)];
        assert_eq!(bid_for(&bids, "p1", "f2").unwrap().id, "b2");
        assert!(bid_for(&bids, "p2", "f1").is_none());
    }

    #[test]
    fn test_bid_project_ids() {
        let mut b = bid("b1", "p1", "f1", 100, 1);
        b.status = BidStatus::Rejected;
        let bids = vec![b, bid("b2", "p2", "f1", 100, 2), bid("b3", "p3", "f2", 100, 3)];
        let ids = bid_project_ids(&bids, "f1");
        assert!(ids.contains("p1"));
        assert!(ids.contains("p2"));
        assert!(!ids.contains("p3"));
    }
}
