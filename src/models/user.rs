//! User model and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Freelancer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Freelancer => "freelancer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "client" => Some(UserRole::Client),
            "freelancer" => Some(UserRole::Freelancer),
            _ => None,
        }
    }
}

/// A marketplace participant.
///
/// Skills are present for freelancers by convention only; the data layer
/// does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated ID and avatar.
    pub fn new(name: String, email: String, role: UserRole) -> Self {
        let avatar_url = avatar_url_for(&name);
        Self {
            id: super::new_id(),
            name,
            email,
            role,
            avatar_url,
            skills: None,
            bio: None,
            joined_at: super::now(),
        }
    }

    pub fn is_freelancer(&self) -> bool {
        self.role == UserRole::Freelancer
    }

    pub fn is_client(&self) -> bool {
        self.role == UserRole::Client
    }
}

/// Build a placeholder avatar URL from a display name.
pub fn avatar_url_for(name: &str) -> String {
    let encoded: String = name
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '-')
        .collect();
    format!("https://ui-avatars.com/api/?name={}&background=random", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(UserRole::from_str("client"), Some(UserRole::Client));
        assert_eq!(UserRole::from_str("Freelancer"), Some(UserRole::Freelancer));
        assert_eq!(UserRole::from_str("admin"), None);
        assert_eq!(UserRole::Freelancer.as_str(), "freelancer");
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url_for("Jane Smith"),
            "https://ui-avatars.com/api/?name=Jane+Smith&background=random"
        );
    }

    #[test]
    fn test_new_user_has_no_skills() {
        let user = User::new("A".into(), "a@example.com".into(), UserRole::Client);
        assert!(user.skills.is_none());
    }
}
