//! Message queries for project conversations.

use crate::models::Message;

/// The conversation a viewer sees on a project page: messages tied to the
/// project where the viewer is sender or receiver, oldest first.
pub fn project_thread<'a>(
    messages: &'a [Message],
    project_id: &str,
    viewer_id: &str,
) -> Vec<&'a Message> {
    let mut thread: Vec<&Message> = messages
        .iter()
        .filter(|m| m.project_id.as_deref() == Some(project_id))
        .filter(|m| m.involves(viewer_id))
        .collect();
    thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    thread
}

/// Unread messages addressed to a user.
pub fn unread_count(messages: &[Message], user_id: &str) -> usize {
    messages
        .iter()
        .filter(|m| m.receiver_id == user_id && !m.read)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_thread_scoped_to_project_and_viewer() {
        let data = Dataset::seed();
        let thread: Vec<&str> = project_thread(&data.messages, "p1", "u2")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(thread, vec!["m1", "m2"]);

        // A bystander sees nothing
        assert!(project_thread(&data.messages, "p1", "u4").is_empty());
    }

    #[test]
    fn test_thread_is_oldest_first() {
        let data = Dataset::seed();
        let thread = project_thread(&data.messages, "p2", "u3");
        assert!(thread.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_unread_count() {
        let data = Dataset::seed();
        assert_eq!(unread_count(&data.messages, "u4"), 1);
        assert_eq!(unread_count(&data.messages, "u1"), 0);
    }
}
