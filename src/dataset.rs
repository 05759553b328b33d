//! Read-only dataset snapshot.
//!
//! All records are supplied up front, either from the built-in seed or a
//! JSON file, and stay immutable for the lifetime of a query. Mutation
//! (posting a project, placing a bid) is a boundary concern that would be
//! handled by a real backend.

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{
    Bid, BidStatus, Budget, Message, Project, ProjectStatus, User, UserRole,
};

/// Static snapshot of every record the services operate on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub bids: Vec<Bid>,
    pub messages: Vec<Message>,
}

impl Dataset {
    /// Load a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            users = dataset.users.len(),
            projects = dataset.projects.len(),
            bids = dataset.bids.len(),
            "Loaded dataset snapshot"
        );
        Ok(dataset)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Built-in demo snapshot: two clients, two freelancers, five projects
    /// with a spread of statuses, and a handful of bids and messages.
    pub fn seed() -> Self {
        let users = vec![
            User {
                id: "u1".into(),
                name: "Marcus Hale".into(),
                email: "marcus@example.com".into(),
                role: UserRole::Client,
                avatar_url: "https://ui-avatars.com/api/?name=Marcus+Hale".into(),
                skills: None,
                bio: Some("Founder building tools for small retailers".into()),
                joined_at: ts(2023, 1, 15),
            },
            User {
                id: "u2".into(),
                name: "Priya Raman".into(),
                email: "priya@example.com".into(),
                role: UserRole::Freelancer,
                avatar_url: "https://ui-avatars.com/api/?name=Priya+Raman".into(),
                skills: Some(vec!["React".into(), "Node.js".into(), "TypeScript".into()]),
                bio: Some("Full-stack developer, five years of product work".into()),
                joined_at: ts(2023, 2, 20),
            },
            User {
                id: "u3".into(),
                name: "Sofia Aguilar".into(),
                email: "sofia@example.com".into(),
                role: UserRole::Client,
                avatar_url: "https://ui-avatars.com/api/?name=Sofia+Aguilar".into(),
                skills: None,
                bio: Some("Runs a marketing studio, hires designers often".into()),
                joined_at: ts(2023, 3, 10),
            },
            User {
                id: "u4".into(),
                name: "Tomas Keller".into(),
                email: "tomas@example.com".into(),
                role: UserRole::Freelancer,
                avatar_url: "https://ui-avatars.com/api/?name=Tomas+Keller".into(),
                skills: Some(vec!["UI/UX Design".into(), "Figma".into(), "Adobe XD".into()]),
                bio: Some("Interface designer focused on mobile products".into()),
                joined_at: ts(2023, 1, 5),
            },
        ];

        let projects = vec![
            Project {
                id: "p1".into(),
                title: "Storefront rebuild with checkout".into(),
                description: "Rebuild our aging storefront as a modern web app with \
                              cart, checkout, and inventory sync against our ERP."
                    .into(),
                client_id: "u1".into(),
                budget: Budget { min: 2000, max: 5000 },
                deadline: ts(2023, 6, 30),
                tags: vec![
                    "Web Development".into(),
                    "React".into(),
                    "Node.js".into(),
                    "E-commerce".into(),
                ],
                status: ProjectStatus::Open,
                created_at: ts(2023, 4, 15),
            },
            Project {
                id: "p2".into(),
                title: "Fitness app interface design".into(),
                description: "Design a clean, friendly interface for a workout tracking \
                              app: onboarding, daily log, and progress screens."
                    .into(),
                client_id: "u3".into(),
                budget: Budget { min: 1500, max: 3000 },
                deadline: ts(2023, 5, 25),
                tags: vec!["UI/UX Design".into(), "Mobile App".into(), "Figma".into()],
                status: ProjectStatus::Open,
                created_at: ts(2023, 4, 10),
            },
            Project {
                id: "p3".into(),
                title: "Campaign results analysis".into(),
                description: "Analyse three months of ad campaign data and report which \
                              channels and creatives actually converted."
                    .into(),
                client_id: "u3".into(),
                budget: Budget { min: 1000, max: 2500 },
                deadline: ts(2023, 5, 15),
                tags: vec!["Data Science".into(), "Marketing".into(), "Analysis".into()],
                status: ProjectStatus::InProgress,
                created_at: ts(2023, 3, 20),
            },
            Project {
                id: "p4".into(),
                title: "Blog theme customization".into(),
                description: "Adapt our WordPress blog to the new brand: custom theme, \
                              a couple of shortcodes, and faster page loads."
                    .into(),
                client_id: "u1".into(),
                budget: Budget { min: 500, max: 1200 },
                deadline: ts(2023, 5, 10),
                tags: vec!["WordPress".into(), "Web Development".into(), "PHP".into()],
                status: ProjectStatus::Completed,
                created_at: ts(2023, 3, 15),
            },
            Project {
                id: "p5".into(),
                title: "Support chatbot prototype".into(),
                description: "Prototype a chatbot that answers common support questions \
                              from our help-center articles, with graceful handoff."
                    .into(),
                client_id: "u1".into(),
                budget: Budget { min: 3000, max: 7000 },
                deadline: ts(2023, 7, 15),
                tags: vec![
                    "AI".into(),
                    "Machine Learning".into(),
                    "Node.js".into(),
                ],
                status: ProjectStatus::Open,
                created_at: ts(2023, 4, 20),
            },
        ];

        let bids = vec![
            Bid {
                id: "b1".into(),
                project_id: "p1".into(),
                freelancer_id: "u2".into(),
                amount: 3500,
                delivery_days: 30,
                proposal: "I have shipped several storefronts with checkout and ERP \
                           sync and can deliver within your window."
                    .into(),
                status: BidStatus::Pending,
                created_at: ts(2023, 4, 16),
            },
            Bid {
                id: "b2".into(),
                project_id: "p2".into(),
                freelancer_id: "u4".into(),
                amount: 1800,
                delivery_days: 15,
                proposal: "Fitness products are my main portfolio area; happy to share \
                           two recent onboarding flows."
                    .into(),
                status: BidStatus::Accepted,
                created_at: ts(2023, 4, 12),
            },
            Bid {
                id: "b3".into(),
                project_id: "p3".into(),
                freelancer_id: "u2".into(),
                amount: 1200,
                delivery_days: 7,
                proposal: "I can turn your raw campaign exports into a channel-level \
                           report with concrete next steps."
                    .into(),
                status: BidStatus::Accepted,
                created_at: ts(2023, 3, 22),
            },
        ];

        let messages = vec![
            Message {
                id: "m1".into(),
                sender_id: "u1".into(),
                receiver_id: "u2".into(),
                project_id: Some("p1".into()),
                content: "Thanks for the proposal. Do you have examples of past \
                          checkout integrations?"
                    .into(),
                read: true,
                created_at: ts_hm(2023, 4, 17, 10, 30),
            },
            Message {
                id: "m2".into(),
                sender_id: "u2".into(),
                receiver_id: "u1".into(),
                project_id: Some("p1".into()),
                content: "Yes, two recent ones. I'll send portfolio links shortly.".into(),
                read: true,
                created_at: ts_hm(2023, 4, 17, 11, 45),
            },
            Message {
                id: "m3".into(),
                sender_id: "u3".into(),
                receiver_id: "u4".into(),
                project_id: Some("p2".into()),
                content: "The design direction looks great. When could you start?".into(),
                read: false,
                created_at: ts_hm(2023, 4, 13, 9, 15),
            },
            Message {
                id: "m4".into(),
                sender_id: "u4".into(),
                receiver_id: "u3".into(),
                project_id: Some("p2".into()),
                content: "Right away. Let's settle the screen list first.".into(),
                read: false,
                created_at: ts_hm(2023, 4, 13, 10, 20),
            },
        ];

        Self { users, projects, bids, messages }
    }
}

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn ts_hm(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lookups() {
        let data = Dataset::seed();
        assert!(data.user("u2").is_some());
        assert!(data.user("missing").is_none());
        assert_eq!(data.user_by_email("sofia@example.com").unwrap().id, "u3");
        assert_eq!(data.project("p4").unwrap().status, ProjectStatus::Completed);
    }

    #[test]
    fn test_seed_referential_integrity() {
        let data = Dataset::seed();
        for project in &data.projects {
            assert!(data.user(&project.client_id).is_some());
            assert!(project.budget.min <= project.budget.max);
        }
        for bid in &data.bids {
            assert!(data.project(&bid.project_id).is_some());
            assert!(data.user(&bid.freelancer_id).is_some());
            assert!(bid.amount > 0);
            assert!(bid.delivery_days > 0);
        }
        for msg in &data.messages {
            assert!(data.user(&msg.sender_id).is_some());
            assert!(data.user(&msg.receiver_id).is_some());
        }
    }

    #[test]
    fn test_json_round_trip() {
        let data = Dataset::seed();
        let json = serde_json::to_string(&data).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.users.len(), data.users.len());
        assert_eq!(back.projects.len(), data.projects.len());
        assert_eq!(back.bids.len(), data.bids.len());
        assert_eq!(back.messages.len(), data.messages.len());
    }
}
