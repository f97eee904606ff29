//! Credentials module - OS-vault backed secret storage for provider API keys.

mod credentials_model;
mod credentials_service;
mod credentials_traits;
mod memory_store;

pub use credentials_model::ProviderKeys;
pub use credentials_service::CredentialService;
pub use credentials_traits::{CredentialServiceTrait, SecretStore};
pub use memory_store::InMemorySecretStore;
