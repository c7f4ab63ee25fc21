//! JWT claims carried by every access token.

use serde::{Deserialize, Serialize};

use authgate_entity::principal::PrincipalType;

/// Claims payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user or client id.
    pub sub: String,
    /// Kind of principal the token was issued to.
    pub typ: PrincipalType,
    /// Space-separated granted permissions.
    pub scope: String,
    /// Display name, present on user tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}
