//! Argon2id hashing of peppered credentials.

use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tokio::sync::OnceCell;
use tokio::task::JoinError;

use authgate_core::config::AuthConfig;
use authgate_core::error::{AppError, ErrorKind};
use authgate_core::result::AppResult;

/// Plaintext hashed once per hasher for [`CredentialHasher::verify_decoy`].
const DECOY_PLAINTEXT: &str = "authgate-decoy-credential";

/// Hashes and verifies credentials with Argon2id.
///
/// The pepper is prepended to the plaintext before hashing. Users and
/// clients each get their own instance so the two peppers never mix.
///
/// The async methods run Argon2 on tokio's blocking pool; the `_blocking`
/// variants are for callers already off the runtime.
#[derive(Clone)]
pub struct CredentialHasher {
    pepper: Arc<str>,
    params: Params,
    decoy: Arc<OnceCell<String>>,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn join_failure(e: JoinError) -> AppError {
    AppError::with_source(ErrorKind::HashFailure, "Credential hashing task failed", e)
}

impl CredentialHasher {
    /// Creates a hasher using the work factor from `config`.
    pub fn new(pepper: impl Into<String>, config: &AuthConfig) -> AppResult<Self> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::hash_failure(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self {
            pepper: Arc::from(pepper.into()),
            params,
            decoy: Arc::new(OnceCell::new()),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn peppered(&self, plaintext: &str) -> String {
        format!("{}{}", self.pepper, plaintext)
    }

    /// Hashes a plaintext credential with a random salt.
    ///
    /// Returns a PHC string with the salt and parameters embedded.
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let hasher = self.clone();
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash_blocking(&plaintext))
            .await
            .map_err(join_failure)?
    }

    /// Verifies a plaintext credential against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. A hash that cannot be parsed is a
    /// `HashFailure`.
    pub async fn verify(&self, hash: &str, plaintext: &str) -> AppResult<bool> {
        let hasher = self.clone();
        let hash = hash.to_owned();
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify_blocking(&hash, &plaintext))
            .await
            .map_err(join_failure)?
    }

    /// Runs a full verification against a fixed hash and discards the result.
    ///
    /// Login paths call this when the principal does not exist, so an
    /// unknown account costs the same Argon2 work as a wrong password.
    pub async fn verify_decoy(&self, plaintext: &str) -> AppResult<()> {
        let decoy = self
            .decoy
            .get_or_try_init(|| self.hash(DECOY_PLAINTEXT))
            .await?;
        self.verify(decoy, plaintext).await.map(|_| ())
    }

    /// [`hash`](Self::hash) on the calling thread.
    pub fn hash_blocking(&self, plaintext: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(self.peppered(plaintext).as_bytes(), &salt)
            .map_err(|e| AppError::hash_failure(format!("Credential hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// [`verify`](Self::verify) on the calling thread.
    pub fn verify_blocking(&self, hash: &str, plaintext: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::hash_failure(format!("Invalid credential hash format: {e}")))?;

        match self
            .argon2()
            .verify_password(self.peppered(plaintext).as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::hash_failure(format!(
                "Credential verification failed: {e}"
            ))),
        }
    }
}
