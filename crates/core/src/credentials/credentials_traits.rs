use async_trait::async_trait;

use crate::credentials::ProviderKeys;
use crate::errors::Result;

/// Capability over an OS-level secret vault.
///
/// Records are addressed by the application-wide `service` name plus a
/// caller-supplied `account`. Implementations must report a missing record as
/// `Ok(None)` / `Ok(false)` and reserve `Err` for vault access failures.
pub trait SecretStore: Send + Sync {
    /// Write or overwrite the secret for `(service, account)`.
    fn set_secret(&self, service: &str, account: &str, secret: &str) -> Result<()>;

    /// Read the secret for `(service, account)`, `None` if no record exists.
    fn get_secret(&self, service: &str, account: &str) -> Result<Option<String>>;

    /// Remove the record, returning whether one existed.
    fn delete_secret(&self, service: &str, account: &str) -> Result<bool>;
}

/// Trait for credential service operations
#[async_trait]
pub trait CredentialServiceTrait: Send + Sync {
    /// Vault service name every account is filed under.
    fn service_name(&self) -> &str;

    async fn save_secret(&self, account: &str, secret: &str) -> Result<()>;

    async fn get_secret(&self, account: &str) -> Result<Option<String>>;

    async fn delete_secret(&self, account: &str) -> Result<bool>;

    /// Save the non-empty provider keys, leaving the others untouched.
    async fn save_provider_keys(&self, keys: &ProviderKeys) -> Result<()>;

    async fn get_provider_keys(&self) -> Result<ProviderKeys>;
}
