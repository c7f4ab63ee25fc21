//! Unified application error types for authgate.
//!
//! Every layer maps its failures into [`AppError`]. Callers branch on
//! [`ErrorKind`], never on the message text.

use std::fmt;
use thiserror::Error;

/// Closed error taxonomy shared by stores, use cases, and the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested row does not exist (or is not owned by the caller).
    NotFound,
    /// A uniqueness constraint was violated.
    AlreadyExists,
    /// Input failed validation or a store check constraint.
    InvalidData,
    /// Credentials were rejected. Never says which half was wrong.
    LoginFailure,
    /// The bearer token is missing, malformed, or outside its validity window.
    Unauthenticated,
    /// The caller is authenticated but lacks the required permission.
    PermissionDenied,
    /// Hashing or hash verification failed internally.
    HashFailure,
    /// Token signing failed.
    Token,
    /// Any other persistence failure. The driver error is kept as the source.
    Store,
    /// Configuration is missing or invalid.
    Configuration,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// Whether this kind must be surfaced to callers as an opaque internal error.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::HashFailure | Self::Token | Self::Store | Self::Configuration | Self::Internal
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::AlreadyExists => write!(f, "ALREADY_EXISTS"),
            Self::InvalidData => write!(f, "INVALID_DATA"),
            Self::LoginFailure => write!(f, "LOGIN_FAILURE"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::PermissionDenied => write!(f, "PERMISSION_DENIED"),
            Self::HashFailure => write!(f, "HASH_FAILURE"),
            Self::Token => write!(f, "TOKEN"),
            Self::Store => write!(f, "STORE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout authgate.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidData, message)
    }

    pub fn login_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoginFailure, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    pub fn hash_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::HashFailure, message)
    }

    pub fn token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Token, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Store, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
