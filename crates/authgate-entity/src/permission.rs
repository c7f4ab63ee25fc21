//! The closed permission registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use authgate_core::AppError;

/// A permission token that may appear in a client's scope.
///
/// Matching is exact string equality; there is no hierarchy beyond the
/// wildcard [`Permission::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Wildcard granting every permission.
    #[serde(rename = "*")]
    All,
    /// May create resources.
    #[serde(rename = "resource:create")]
    CreateResource,
}

impl Permission {
    /// Every registered permission.
    pub const REGISTRY: [Permission; 2] = [Permission::All, Permission::CreateResource];

    /// Return the wire form of the permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "*",
            Self::CreateResource => "resource:create",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::REGISTRY
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_data(format!(
                    "Unknown permission: '{s}'. Expected one of: *, resource:create"
                ))
            })
    }
}
