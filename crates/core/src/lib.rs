//! OdinView Core - Domain entities, services, and traits.
//!
//! This crate contains the storage-agnostic logic of the OdinView back end.
//! It defines the traits that are implemented by the `storage-sqlite` crate
//! (knowledge items) and by the host application (the OS secret vault).

pub mod constants;
pub mod credentials;
pub mod errors;
pub mod ipc;
pub mod knowledge;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
