//! Access token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;

use super::claims::Claims;

/// Validates access tokens against the signing secret and issuer.
///
/// Time bounds are checked against an explicit `now` rather than by the
/// JWT library, without leeway.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    /// Creates a verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a token at the current time.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies signature, algorithm, issuer and required claims, then
    /// rejects the token if `now < nbf` or `now >= exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AppResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::unauthenticated("Invalid token issuer")
                    }
                    _ => AppError::unauthenticated("Invalid token"),
                }
            })?
            .claims;

        let now = now.timestamp();
        if now < claims.nbf {
            return Err(AppError::unauthenticated("Token is not yet valid"));
        }
        if now >= claims.exp {
            return Err(AppError::unauthenticated("Token has expired"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenIssuer;
    use authgate_core::error::ErrorKind;
    use authgate_entity::principal::PrincipalType;
    use chrono::TimeDelta;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "authgate-test".to_string(),
            token_ttl_seconds: 900,
            ..AuthConfig::default()
        }
    }

    fn issued_at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn issue(config: &AuthConfig, subject: &str) -> String {
        TokenIssuer::new(config)
            .unwrap()
            .issue(subject, PrincipalType::User, "*", Some("Alice"), issued_at())
            .unwrap()
            .token
    }

    #[test]
    fn test_round_trip_claims() {
        let token = issue(&config(), "user-1");
        let claims = TokenVerifier::new(&config())
            .verify_at(&token, issued_at() + TimeDelta::seconds(1))
            .unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.typ, PrincipalType::User);
        assert_eq!(claims.scope, "*");
        assert_eq!(claims.name.as_deref(), Some("Alice"));
        assert_eq!(claims.iss, "authgate-test");
        assert_eq!(claims.iat, claims.nbf);
        assert_eq!(claims.exp - claims.iat, 900);
    }

    #[test]
    fn test_validity_window() {
        let token = issue(&config(), "user-1");
        let verifier = TokenVerifier::new(&config());
        let at = |offset: i64| verifier.verify_at(&token, issued_at() + TimeDelta::seconds(offset));

        assert!(at(0).is_ok());
        assert!(at(1).is_ok());
        assert!(at(899).is_ok());
        assert_eq!(at(900).unwrap_err().kind, ErrorKind::Unauthenticated);
        assert_eq!(at(901).unwrap_err().kind, ErrorKind::Unauthenticated);
        assert_eq!(at(-1).unwrap_err().kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_wrong_issuer() {
        let token = issue(&config(), "user-1");
        let other = AuthConfig {
            issuer: "someone-else".to_string(),
            ..config()
        };
        let err = TokenVerifier::new(&other)
            .verify_at(&token, issued_at())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_wrong_secret() {
        let token = issue(&config(), "user-1");
        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..config()
        };
        let err = TokenVerifier::new(&other)
            .verify_at(&token, issued_at())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_tampered_payload() {
        let original = issue(&config(), "user-1");
        let forged = issue(&config(), "user-2");
        let original: Vec<&str> = original.split('.').collect();
        let forged: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", original[0], forged[1], original[2]);

        let err = TokenVerifier::new(&config())
            .verify_at(&spliced, issued_at())
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_garbage_token() {
        let err = TokenVerifier::new(&config())
            .verify("not.a.token")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_client_token_omits_name() {
        let token = TokenIssuer::new(&config())
            .unwrap()
            .issue(
                "client-1",
                PrincipalType::Client,
                "resource:create",
                None,
                issued_at(),
            )
            .unwrap();
        assert_eq!(token.expires_in, 900);

        let claims = TokenVerifier::new(&config())
            .verify_at(&token.token, issued_at())
            .unwrap();
        assert_eq!(claims.typ, PrincipalType::Client);
        assert!(claims.name.is_none());
    }
}
