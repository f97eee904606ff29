use std::collections::HashMap;
use std::sync::RwLock;

use super::credentials_traits::SecretStore;
use crate::errors::{Error, Result};

/// Process-local secret store.
///
/// Stands in for the OS vault in tests and in ephemeral sessions where no
/// keychain daemon is available. Nothing survives process exit.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    secrets: RwLock<HashMap<(String, String), String>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> Error {
    Error::StoreUnavailable("In-memory secret store lock poisoned".into())
}

impl SecretStore for InMemorySecretStore {
    fn set_secret(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        self.secrets
            .write()
            .map_err(|_| poisoned())?
            .insert((service.to_string(), account.to_string()), secret.to_string());
        Ok(())
    }

    fn get_secret(&self, service: &str, account: &str) -> Result<Option<String>> {
        let secrets = self.secrets.read().map_err(|_| poisoned())?;
        Ok(secrets
            .get(&(service.to_string(), account.to_string()))
            .cloned())
    }

    fn delete_secret(&self, service: &str, account: &str) -> Result<bool> {
        let removed = self
            .secrets
            .write()
            .map_err(|_| poisoned())?
            .remove(&(service.to_string(), account.to_string()));
        Ok(removed.is_some())
    }
}
