//! Message model for project-scoped conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A direct message between two users, optionally tied to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new unread message.
    pub fn new(
        sender_id: String,
        receiver_id: String,
        project_id: Option<String>,
        content: String,
    ) -> Self {
        Self {
            id: super::new_id(),
            sender_id,
            receiver_id,
            project_id,
            content,
            read: false,
            created_at: super::now(),
        }
    }

    /// Whether `user_id` is the sender or the receiver.
    pub fn involves(&self, user_id: &str) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_is_unread() {
        let msg = Message::new("a".into(), "b".into(), Some("p1".into()), "hi".into());
        assert!(!msg.read);
        assert!(msg.involves("a"));
        assert!(msg.involves("b"));
        assert!(!msg.involves("c"));
    }
}
