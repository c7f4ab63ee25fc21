//! # authgate-auth
//!
//! Credential primitives shared by the use cases and the HTTP layer.
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing of peppered passwords and client secrets
//! - `secret`: random client secret generation
//! - `jwt`: HS256 access token issuing and verification
//! - `scope`: flat permission matching against a granted scope string

pub mod jwt;
pub mod password;
pub mod scope;
pub mod secret;

pub use jwt::{Claims, IssuedToken, TokenIssuer, TokenVerifier};
pub use password::CredentialHasher;
pub use secret::SecretGenerator;
