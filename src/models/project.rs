//! Project model: a client-posted job listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project. Transitions are driven externally; the
/// query services treat this as an opaque enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(ProjectStatus::Open),
            "in-progress" => Some(ProjectStatus::InProgress),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// Budget range in whole dollars. Invariant: min <= max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub min: u32,
    pub max: u32,
}

impl Budget {
    /// Midpoint of the range, used for average-budget stats.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// A client-posted job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub client_id: String,
    pub budget: Budget,
    pub deadline: DateTime<Utc>,
    /// Free-text labels; order is the author's, duplicates carry no meaning.
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a new open project from validated form data.
    pub fn from_draft(draft: ValidatedProject, client_id: String) -> Self {
        Self {
            id: super::new_id(),
            title: draft.title,
            description: draft.description,
            client_id,
            budget: draft.budget,
            deadline: draft.deadline,
            tags: draft.tags,
            status: ProjectStatus::Open,
            created_at: super::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ProjectStatus::Open
    }

    /// Whole days from `now` until the deadline, never negative.
    pub fn days_until_deadline(&self, now: DateTime<Utc>) -> i64 {
        (self.deadline - now).num_days().max(0)
    }
}

/// Project fields that have passed form validation.
#[derive(Debug, Clone)]
pub struct ValidatedProject {
    pub title: String,
    pub description: String,
    pub budget: Budget,
    pub deadline: DateTime<Utc>,
    pub tags: Vec<String>,
}
