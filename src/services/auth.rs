//! Login and registration against the dataset snapshot.
//!
//! Mock credential semantics, as in the rest of the system: the snapshot
//! carries no passwords, so resolving the email is the whole check and the
//! resulting session is a trusted local flag.

use tracing::info;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::forms::ValidatedRegistration;
use crate::models::User;
use crate::session::Session;

/// Resolve an email to a session.
pub fn login(data: &Dataset, email: &str) -> Result<Session> {
    let user = data.user_by_email(email).ok_or(Error::InvalidCredentials)?;
    info!(user_id = %user.id, role = user.role.as_str(), "Logged in");
    Ok(Session::for_user(user))
}

/// A freshly registered account and its session. The snapshot itself is
/// never mutated; persisting the account is a backend concern.
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub user: User,
    pub session: Session,
}

/// Create an account from a validated registration, rejecting an email
/// that already exists in the snapshot.
pub fn register(data: &Dataset, registration: ValidatedRegistration) -> Result<RegisteredUser> {
    if data.user_by_email(&registration.email).is_some() {
        return Err(Error::AlreadyExists(format!(
            "account with email {}",
            registration.email
        )));
    }

    let user = User::new(registration.name, registration.email, registration.role);
    let session = Session::for_user(&user);
    info!(user_id = %user.id, role = user.role.as_str(), "Registered account");

    Ok(RegisteredUser { user, session })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_login_known_email() {
        let data = Dataset::seed();
        let session = login(&data, "priya@example.com").unwrap();
        assert_eq!(session.user_id, "u2");
        assert_eq!(session.role, UserRole::Freelancer);
    }

    #[test]
    fn test_login_unknown_email() {
        let data = Dataset::seed();
        let err = login(&data, "nobody@example.com").unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials));
    }

    #[test]
    fn test_register_rejects_existing_email() {
        let data = Dataset::seed();
        let err = register(
            &data,
            ValidatedRegistration {
                name: "Other".into(),
                email: "priya@example.com".into(),
                role: UserRole::Client,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
    }

    #[test]
    fn test_register_new_account() {
        let data = Dataset::seed();
        let registered = register(
            &data,
            ValidatedRegistration {
                name: "New Person".into(),
                email: "new@example.com".into(),
                role: UserRole::Freelancer,
            },
        )
        .unwrap();
        assert_eq!(registered.session.user_id, registered.user.id);
        assert!(registered.user.avatar_url.contains("New+Person"));
        // The snapshot stays untouched
        assert!(data.user_by_email("new@example.com").is_none());
    }
}
