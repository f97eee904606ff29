pub mod api;
pub mod config;
pub mod error;
pub mod secret_store;
mod main_lib;

pub use main_lib::{build_credential_service, build_state, build_state_with, init_tracing, AppState};
