//! Project search and filtering.
//!
//! The filter is a conjunction of three independent predicates (text, tags,
//! status), each of which passes everything when left at its default. Input
//! order is preserved; nothing is re-sorted.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{Project, ProjectStatus};

/// Status criterion: everything, or one concrete status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Parse the UI's status selector value ("all" or a status name).
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        ProjectStatus::from_str(s).map(StatusFilter::Only)
    }

    fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Filter criteria as assembled by the search form.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Case-insensitive substring matched against title or description.
    pub text: String,
    /// Requested tags; a project passes when it carries at least one of
    /// them. Matching is exact string equality: the options offered to the
    /// caller come from [`extract_tags`], so they exist verbatim.
    pub tags: Vec<String>,
    pub status: StatusFilter,
}

/// Select the projects matching every active criterion, in input order.
pub fn filter_projects<'a>(projects: &'a [Project], query: &ProjectQuery) -> Vec<&'a Project> {
    let matches: Vec<&Project> = projects
        .iter()
        .filter(|p| matches_text(p, &query.text))
        .filter(|p| matches_tags(p, &query.tags))
        .filter(|p| query.status.matches(p.status))
        .collect();

    debug!(
        total = projects.len(),
        matched = matches.len(),
        text = %query.text,
        "Filtered projects"
    );

    matches
}

/// Every distinct tag across the collection, sorted ascending. Recomputed
/// on demand; the collections involved are small.
pub fn extract_tags(projects: &[Project]) -> Vec<String> {
    let tags: BTreeSet<&String> = projects.iter().flat_map(|p| &p.tags).collect();
    tags.into_iter().cloned().collect()
}

fn matches_text(project: &Project, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

fn matches_tags(project: &Project, tags: &[String]) -> bool {
    tags.is_empty() || tags.iter().any(|tag| project.tags.contains(tag))
}
