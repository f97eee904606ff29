use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::credentials_traits::{CredentialServiceTrait, SecretStore};
use crate::constants::{APP_SERVICE_NAME, GEMINI_ACCOUNT, OPENAI_ACCOUNT};
use crate::credentials::ProviderKeys;
use crate::errors::Result;

/// Stores provider API keys in the OS credential vault.
///
/// Every record is filed under one fixed service name; callers only pick the
/// account. The service keeps no cache, so each call is a single round trip to
/// the vault and failures surface unchanged.
pub struct CredentialService {
    service_name: String,
    store: Arc<dyn SecretStore>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self::with_service_name(store, APP_SERVICE_NAME)
    }

    pub fn with_service_name(store: Arc<dyn SecretStore>, service_name: impl Into<String>) -> Self {
        CredentialService {
            service_name: service_name.into(),
            store,
        }
    }

    /// Runs a vault call on the blocking pool; OS keychains may block on IPC or a UI prompt.
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&dyn SecretStore, &str) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let service_name = self.service_name.clone();
        tokio::task::spawn_blocking(move || op(store.as_ref(), &service_name)).await?
    }
}

#[async_trait]
impl CredentialServiceTrait for CredentialService {
    fn service_name(&self) -> &str {
        &self.service_name
    }

    async fn save_secret(&self, account: &str, secret: &str) -> Result<()> {
        debug!("Saving secret for account '{}'", account);
        let account = account.to_string();
        let secret = secret.to_string();
        self.with_store(move |store, service| store.set_secret(service, &account, &secret))
            .await
    }

    async fn get_secret(&self, account: &str) -> Result<Option<String>> {
        debug!("Reading secret for account '{}'", account);
        let account = account.to_string();
        self.with_store(move |store, service| store.get_secret(service, &account))
            .await
    }

    async fn delete_secret(&self, account: &str) -> Result<bool> {
        debug!("Deleting secret for account '{}'", account);
        let account = account.to_string();
        self.with_store(move |store, service| store.delete_secret(service, &account))
            .await
    }

    async fn save_provider_keys(&self, keys: &ProviderKeys) -> Result<()> {
        debug!("Saving provider keys to the credential vault");
        let pairs = [(OPENAI_ACCOUNT, &keys.openai), (GEMINI_ACCOUNT, &keys.gemini)];
        for (account, key) in pairs {
            if let Some(key) = key.as_deref().filter(|k| !k.is_empty()) {
                self.save_secret(account, key).await?;
            }
        }
        Ok(())
    }

    async fn get_provider_keys(&self) -> Result<ProviderKeys> {
        Ok(ProviderKeys {
            openai: self.get_secret(OPENAI_ACCOUNT).await?,
            gemini: self.get_secret(GEMINI_ACCOUNT).await?,
        })
    }
}
