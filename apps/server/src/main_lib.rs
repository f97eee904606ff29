use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use odinview_ai::{ChatConfig, ChatService};
use odinview_core::{
    credentials::{CredentialService, CredentialServiceTrait},
    knowledge::{KnowledgeService, KnowledgeServiceTrait},
};
use odinview_storage_sqlite::{db, knowledge::KnowledgeRepository};

use crate::config::{Config, LogFormat};
use crate::secret_store::build_secret_store;

pub struct AppState {
    pub credential_service: Arc<dyn CredentialServiceTrait>,
    pub knowledge_service: Arc<dyn KnowledgeServiceTrait>,
    pub chat_service: Arc<ChatService>,
    pub db_path: String,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Credential service for `config`'s service name and vault backend.
pub fn build_credential_service(config: &Config) -> Arc<CredentialService> {
    tracing::info!(
        "Creating credential service '{}' ({:?} backend)",
        config.service_name,
        config.secret_backend
    );
    Arc::new(CredentialService::with_service_name(
        build_secret_store(config.secret_backend),
        config.service_name.clone(),
    ))
}

/// Wires every service from `config`, including a fresh credential service.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    build_state_with(config, build_credential_service(config)).await
}

/// Wires the database-backed services around an existing credential service.
pub async fn build_state_with(
    config: &Config,
    credential_service: Arc<dyn CredentialServiceTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let knowledge_repository = Arc::new(KnowledgeRepository::new(pool.clone(), writer));
    let knowledge_service: Arc<dyn KnowledgeServiceTrait> =
        Arc::new(KnowledgeService::new(knowledge_repository));

    let chat_service = Arc::new(ChatService::new(
        credential_service.clone(),
        ChatConfig {
            simulated_latency: config.chat_latency,
        },
    ));

    Ok(Arc::new(AppState {
        credential_service,
        knowledge_service,
        chat_service,
        db_path,
    }))
}
