//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential hashing configuration.
///
/// `jwt_secret` and `issuer` have no usable defaults; see
/// [`AppConfig::validate`](super::AppConfig::validate).
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Value of the `iss` claim; tokens from any other issuer are rejected.
    #[serde(default)]
    pub issuer: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Pepper prepended to user passwords before hashing.
    #[serde(default)]
    pub user_pepper: String,
    /// Pepper prepended to client secrets before hashing.
    #[serde(default)]
    pub client_pepper: String,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 lanes.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: String::new(),
            token_ttl_seconds: default_token_ttl(),
            user_pepper: String::new(),
            client_pepper: String::new(),
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("issuer", &self.issuer)
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("user_pepper", &"****")
            .field("client_pepper", &"****")
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .finish()
    }
}

fn default_token_ttl() -> u64 {
    900
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
