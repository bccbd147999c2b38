//! Shared-secret JWT adapter for session validation.
//!
//! Tokens are issued elsewhere and signed with HS256. This adapter checks the
//! signature, expiry and (when configured) issuer, then maps the claims to an
//! `AuthenticatedUser`. The `sub` claim is the learner id.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT session validator.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret shared with the token issuer.
    pub secret: SecretString,

    /// Expected `iss` claim. Not checked when `None`.
    pub issuer: Option<String>,

    /// Clock skew tolerance for `exp`, in seconds.
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            issuer: None,
            leeway_secs: 0,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

/// Access token claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject - the learner id
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Validates HS256 access tokens.
pub struct JwtSessionValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(config.secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!("Invalid issuer in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::warn!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;
        let claims = data.claims;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Invalid subject in token");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email, claims.name))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.validation.iss)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "a-test-secret-that-is-at-least-32-bytes-long";

    fn config() -> JwtConfig {
        JwtConfig::new(SecretString::new(SECRET.to_string()))
    }

    fn token(secret: &str, claims: &AccessClaims) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(exp_offset_secs: i64) -> AccessClaims {
        AccessClaims {
            sub: "learner@example.com".to_string(),
            exp: chrono::Utc::now().timestamp() + exp_offset_secs,
            iss: Some("cognitive-analyzer".to_string()),
            email: Some("learner@example.com".to_string()),
            name: Some("Ada".to_string()),
        }
    }

    #[tokio::test]
    async fn valid_token_maps_claims_to_user() {
        let validator = JwtSessionValidator::new(&config());

        let user = validator.validate(&token(SECRET, &claims(3600))).await.unwrap();

        assert_eq!(user.id.as_str(), "learner@example.com");
        assert_eq!(user.email.as_deref(), Some("learner@example.com"));
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let validator = JwtSessionValidator::new(&config());

        let result = validator.validate(&token(SECRET, &claims(-3600))).await;

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid() {
        let validator = JwtSessionValidator::new(&config());
        let forged = token("another-secret-that-is-also-32-bytes-long!", &claims(3600));

        let result = validator.validate(&forged).await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn issuer_is_checked_when_configured() {
        let validator = JwtSessionValidator::new(&config().with_issuer("someone-else"));

        let result = validator.validate(&token(SECRET, &claims(3600))).await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let validator = JwtSessionValidator::new(&config());
        let result = validator.validate("not-a-jwt").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
