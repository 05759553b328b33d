//! Skill-based project recommendations.

use std::collections::HashSet;

use tracing::debug;

use crate::models::Project;

/// Propose open projects matching a freelancer's skills.
///
/// A project qualifies when it is open, the freelancer has not already bid
/// on it, and at least one skill is a case-insensitive substring of one of
/// its tags. Substring containment is intentionally permissive: the skill
/// "React" matches the tag "React Native". The first `limit` qualifying
/// projects are returned in input order; no further ranking is applied.
///
/// `skills` of `None` (a client, or a freelancer without a profile) yields
/// no recommendations.
pub fn recommend_projects<'a>(
    skills: Option<&[String]>,
    projects: &'a [Project],
    existing_bid_project_ids: &HashSet<String>,
    limit: usize,
) -> Vec<&'a Project> {
    let skills = match skills {
        Some(skills) if !skills.is_empty() => skills,
        _ => return Vec::new(),
    };

    let picks: Vec<&Project> = projects
        .iter()
        .filter(|p| p.is_open())
        .filter(|p| !existing_bid_project_ids.contains(&p.id))
        .filter(|p| skills.iter().any(|skill| skill_matches_any_tag(skill, &p.tags)))
        .take(limit)
        .collect();

    debug!(skills = skills.len(), picks = picks.len(), limit, "Computed recommendations");

    picks
}

fn skill_matches_any_tag(skill: &str, tags: &[String]) -> bool {
    let skill = skill.to_lowercase();
    tags.iter().any(|tag| tag.to_lowercase().contains(&skill))
}
