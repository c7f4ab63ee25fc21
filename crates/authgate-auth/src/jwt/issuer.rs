//! HS256 access token creation.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use authgate_core::config::AuthConfig;
use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::principal::PrincipalType;

use super::claims::Claims;

/// Signs access tokens with the configured secret, issuer and TTL.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    issuer: String,
    ttl: TimeDelta,
}

/// A freshly signed access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds, as reported to the caller.
    pub expires_in: u64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Creates an issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let ttl = i64::try_from(config.token_ttl_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Token TTL of {} seconds is out of range",
                    config.token_ttl_seconds
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            ttl,
        })
    }

    /// Token lifetime in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl.num_seconds().unsigned_abs()
    }

    /// Issues a token valid from `now` until `now + ttl`.
    pub fn issue(
        &self,
        subject: &str,
        principal_type: PrincipalType,
        scope: &str,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<IssuedToken> {
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: subject.to_string(),
            typ: principal_type,
            scope: scope.to_string(),
            name: name.map(str::to_string),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::token(format!("Failed to sign access token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at,
            expires_in: self.ttl_seconds(),
        })
    }
}
