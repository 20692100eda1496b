//! Session state: whether a login has succeeded in this process.
//!
//! Nothing is persisted; a restart always begins anonymous.

use crate::models::User;

/// Authentication state of the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    /// Record a successful login.
    pub fn authenticate(&mut self, user: User) {
        *self = SessionState::Authenticated(user);
    }

    /// Drop back to anonymous. Idempotent.
    pub fn reset(&mut self) {
        *self = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous() {
        let session = SessionState::new();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_authenticate_then_reset() {
        let mut session = SessionState::new();
        session.authenticate(User::new("Ada", "ada@example.com"));
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));

        session.reset();
        assert_eq!(session, SessionState::Anonymous);

        session.reset();
        assert_eq!(session, SessionState::Anonymous);
    }
}
