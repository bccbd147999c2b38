//! Authentication types for the domain layer.
//!
//! These types represent a learner identity extracted from a bearer token.
//! They have no provider dependencies: the JWT adapter and the test mock both
//! populate them through the `SessionValidator` port.

use super::UserId;
use thiserror::Error;

/// Authenticated learner extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The learner identifier (token subject).
    pub id: UserId,

    /// Email address, when the token carries one.
    pub email: Option<String>,

    /// Display name if available.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>, display_name: Option<String>) -> Self {
        Self {
            id,
            email,
            display_name,
        }
    }

    /// Returns the display name, falling back to email and then the id.
    pub fn display_name_or_email(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (misconfiguration, key loading).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should obtain a fresh token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("learner-123").unwrap()
    }

    #[test]
    fn display_name_wins_over_email() {
        let user = AuthenticatedUser::new(
            test_user_id(),
            Some("learner@example.com".to_string()),
            Some("Ada".to_string()),
        );
        assert_eq!(user.display_name_or_email(), "Ada");
    }

    #[test]
    fn email_used_when_no_display_name() {
        let user =
            AuthenticatedUser::new(test_user_id(), Some("learner@example.com".to_string()), None);
        assert_eq!(user.display_name_or_email(), "learner@example.com");
    }

    #[test]
    fn falls_back_to_id() {
        let user = AuthenticatedUser::new(test_user_id(), None, None);
        assert_eq!(user.display_name_or_email(), "learner-123");
    }

    #[test]
    fn auth_error_displays_correctly() {
        assert_eq!(format!("{}", AuthError::InvalidToken), "Invalid or expired token");
        assert_eq!(
            format!("{}", AuthError::service_unavailable("no key")),
            "Auth service unavailable: no key"
        );
    }

    #[test]
    fn token_errors_require_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }
}
