//! Shared fixtures for service unit tests.

use std::sync::Arc;

use authgate_auth::password::CredentialHasher;
use authgate_core::config::AuthConfig;
use authgate_database::memory::{MemoryClientStore, MemoryUserStore};
use authgate_database::store::{ClientStore, UserStore};

pub(crate) fn fast_auth_config() -> AuthConfig {
    AuthConfig {
        hash_memory_kib: 64,
        hash_iterations: 1,
        hash_parallelism: 1,
        ..AuthConfig::default()
    }
}

pub(crate) fn hasher() -> Arc<CredentialHasher> {
    Arc::new(CredentialHasher::new("test-pepper", &fast_auth_config()).unwrap())
}

pub(crate) fn user_store() -> Arc<dyn UserStore> {
    Arc::new(MemoryUserStore::new())
}

pub(crate) fn client_store() -> Arc<dyn ClientStore> {
    Arc::new(MemoryClientStore::new())
}

/// Hasher at the default work factor, for tests that depend on real cost.
pub(crate) fn default_cost_hasher() -> Arc<CredentialHasher> {
    Arc::new(CredentialHasher::new("test-pepper", &AuthConfig::default()).unwrap())
}
