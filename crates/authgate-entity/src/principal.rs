//! Principal type carried in token claims.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a token subject is a human user or a machine client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalType {
    /// A human who logged in with account and password.
    User,
    /// A machine that logged in with client id and secret.
    Client,
}

impl PrincipalType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
