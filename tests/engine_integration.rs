//! Integration tests for the marketplace query services.
//!
//! Exercises filtering, tag extraction, bid summaries, and the
//! recommendation heuristic through the public API.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use tender::models::{Bid, BidStatus, Budget, Project, ProjectStatus};
use tender::services::{
    self, extract_tags, filter_projects, recommend_projects, ProjectQuery, StatusFilter,
};
use tender::Dataset;

fn project(id: &str, tags: &[&str], status: ProjectStatus) -> Project {
    Project {
        id: id.into(),
        title: format!("project {}", id),
        description: "description".into(),
        client_id: "c1".into(),
        budget: Budget { min: 100, max: 200 },
        deadline: Utc.with_ymd_and_hms(2023, 6, 30, 0, 0, 0).unwrap(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status,
        created_at: Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap(),
    }
}

fn bid(id: &str, project_id: &str, freelancer_id: &str, amount: u32) -> Bid {
    Bid {
        id: id.into(),
        project_id: project_id.into(),
        freelancer_id: freelancer_id.into(),
        amount,
        delivery_days: 10,
        proposal: "proposal".into(),
        status: BidStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap(),
    }
}

// ============================================================================
// Search & Filter
// ============================================================================

/// An all-defaults query returns every project in order.
#[test]
fn test_default_filter_is_identity() {
    let data = Dataset::seed();
    let out = filter_projects(&data.projects, &ProjectQuery::default());
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    let expected: Vec<&str> = data.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, expected);
}

/// A concrete status filter yields only that status, never growing the set.
#[test]
fn test_status_filter_subset() {
    let data = Dataset::seed();
    for status in [ProjectStatus::Open, ProjectStatus::InProgress, ProjectStatus::Completed] {
        let query = ProjectQuery { status: StatusFilter::Only(status), ..Default::default() };
        let out = filter_projects(&data.projects, &query);
        assert!(out.iter().all(|p| p.status == status));
        assert!(out.len() <= data.projects.len());
    }
}

/// Tag matching is inclusive-OR against the requested set.
#[test]
fn test_tag_filter_inclusive_or() {
    let projects = vec![project("p1", &["React", "Node.js"], ProjectStatus::Open)];

    let query = ProjectQuery { tags: vec!["React".into()], ..Default::default() };
    assert_eq!(filter_projects(&projects, &query).len(), 1);

    let query = ProjectQuery { tags: vec!["PHP".into()], ..Default::default() };
    assert!(filter_projects(&projects, &query).is_empty());
}

#[test]
fn test_extract_tags_sorted_unique() {
    let data = Dataset::seed();
    let tags = extract_tags(&data.projects);

    let mut sorted = tags.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(tags, sorted);

    // Idempotent
    assert_eq!(extract_tags(&data.projects), tags);

    // "Web Development" appears on two seed projects but only once here
    assert_eq!(tags.iter().filter(|t| *t == "Web Development").count(), 1);
}

// ============================================================================
// Bid summaries
// ============================================================================

#[test]
fn test_bid_summary_values() {
    let bids = vec![
        bid("b1", "px", "f1", 100),
        bid("b2", "px", "f2", 300),
        bid("b3", "px", "f3", 200),
        bid("b4", "other", "f1", 9999),
    ];
    let selected = services::project_bids(&bids, "px");
    let summary = services::summarize_amounts(&selected);

    assert_eq!(summary.count, 3);
    let amounts = summary.amounts.expect("three bids have a spread");
    assert_eq!(amounts.average, 200.0);
    assert_eq!(amounts.min, 100);
    assert_eq!(amounts.max, 300);
}

#[test]
fn test_bid_summary_empty() {
    let summary = services::summarize_amounts(&[]);
    assert_eq!(summary.count, 0);
    assert!(summary.amounts.is_none());
}

// ============================================================================
// Recommendations
// ============================================================================

/// A skill matches a tag by substring; closed projects and non-matching
/// tags are excluded.
#[test]
fn test_recommendation_substring_heuristic() {
    let projects = vec![
        project("a", &["React Native"], ProjectStatus::Open),
        project("b", &["React"], ProjectStatus::Completed),
        project("c", &["Vue"], ProjectStatus::Open),
    ];
    let skills = vec!["React".to_string()];
    let out = recommend_projects(Some(&skills), &projects, &HashSet::new(), 3);
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_recommendation_cap_in_source_order() {
    let projects: Vec<Project> = (1..=5)
        .map(|i| project(&format!("p{}", i), &["Rust"], ProjectStatus::Open))
        .collect();
    let skills = vec!["rust".to_string()];
    let out = recommend_projects(Some(&skills), &projects, &HashSet::new(), 3);
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_recommendation_skips_existing_bids() {
    let data = Dataset::seed();
    let freelancer = data.user("u2").unwrap();
    let existing = services::bid_project_ids(&data.bids, "u2");

    let out = recommend_projects(
        freelancer.skills.as_deref(),
        &data.projects,
        &existing,
        3,
    );

    // p1 matches u2's skills but already carries their bid; p5 is the
    // remaining open match.
    assert!(out.iter().all(|p| !existing.contains(&p.id)));
    let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p5"]);
}

#[test]
fn test_recommendation_without_skills() {
    let data = Dataset::seed();
    assert!(recommend_projects(None, &data.projects, &HashSet::new(), 3).is_empty());
}

// ============================================================================
// Cross-service flow
// ============================================================================

/// Login, look at a project the user bid on, and read the thread.
#[test]
fn test_freelancer_project_view_flow() {
    let data = Dataset::seed();
    let session = services::login(&data, "priya@example.com").unwrap();

    let own = services::bid_for(&data.bids, "p1", &session.user_id).expect("seed bid");
    assert_eq!(own.amount, 3500);

    let thread = services::project_thread(&data.messages, "p1", &session.user_id);
    assert_eq!(thread.len(), 2);
    assert!(thread[0].created_at <= thread[1].created_at);
}
