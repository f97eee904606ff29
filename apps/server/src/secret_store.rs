use std::sync::Arc;

use keyring::Entry;
use once_cell::sync::OnceCell;

use odinview_core::{
    credentials::{CredentialService, InMemorySecretStore, SecretStore},
    errors::Error,
    Result,
};

use crate::config::{Config, SecretBackend};
use crate::main_lib::build_credential_service;

/// Secret store backed by the operating system's credential vault.
///
/// Each `(service, account)` pair maps to one vault entry.
#[derive(Debug, Default)]
pub struct KeyringSecretStore;

impl SecretStore for KeyringSecretStore {
    fn set_secret(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        let entry = entry_for(service, account)?;
        entry.set_password(secret).map_err(store_error)
    }

    fn get_secret(&self, service: &str, account: &str) -> Result<Option<String>> {
        let entry = entry_for(service, account)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(store_error(err)),
        }
    }

    fn delete_secret(&self, service: &str, account: &str) -> Result<bool> {
        let entry = entry_for(service, account)?;
        match entry.delete_password() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(store_error(err)),
        }
    }
}

fn entry_for(service: &str, account: &str) -> Result<Entry> {
    Entry::new(service, account).map_err(store_error)
}

fn store_error(err: keyring::Error) -> Error {
    Error::StoreUnavailable(err.to_string())
}

pub fn build_secret_store(backend: SecretBackend) -> Arc<dyn SecretStore> {
    match backend {
        SecretBackend::Keyring => Arc::new(KeyringSecretStore),
        SecretBackend::Memory => {
            tracing::warn!("Using the in-memory secret store; keys will not survive a restart");
            Arc::new(InMemorySecretStore::new())
        }
    }
}

static SHARED_CREDENTIALS: OnceCell<Arc<CredentialService>> = OnceCell::new();

/// Process-wide credential service.
///
/// The first call builds it from `config`; later calls return the same
/// instance and ignore their argument. [`crate::build_state`] does not go
/// through here, so states built for tests each get their own service.
pub fn shared_credential_service(config: &Config) -> Arc<CredentialService> {
    SHARED_CREDENTIALS
        .get_or_init(|| build_credential_service(config))
        .clone()
}
