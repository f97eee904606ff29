//! Chat service.

use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

use odinview_core::credentials::CredentialServiceTrait;

use crate::error::AiError;
use crate::types::ChatMessage;

/// Assistant reply returned until a real provider is wired in.
pub const MOCK_RESPONSE: &str =
    "This is a mocked response from the AI. The real API call is not yet implemented.";

/// Configuration for chat behavior.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// How long a request waits before the reply is returned.
    pub simulated_latency: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(1000),
        }
    }
}

/// Answers conversations once provider keys are configured.
pub struct ChatService {
    credentials: Arc<dyn CredentialServiceTrait>,
    config: ChatConfig,
}

impl ChatService {
    pub fn new(credentials: Arc<dyn CredentialServiceTrait>, config: ChatConfig) -> Self {
        Self {
            credentials,
            config,
        }
    }

    /// Sends the conversation and returns the assistant's reply.
    ///
    /// Fails with [`AiError::MissingApiKey`] when neither the OpenAI nor the
    /// Gemini key is stored, and with [`AiError::InvalidInput`] for an empty
    /// conversation.
    pub async fn send_prompt(&self, messages: Vec<ChatMessage>) -> Result<ChatMessage, AiError> {
        let keys = self.credentials.get_provider_keys().await?;
        if !keys.any_configured() {
            return Err(AiError::MissingApiKey);
        }

        if messages.is_empty() {
            return Err(AiError::invalid_input("At least one message is required"));
        }

        debug!(
            "Sending {} message(s) to the chat placeholder",
            messages.len()
        );
        tokio::time::sleep(self.config.simulated_latency).await;

        info!("Chat placeholder answered a {}-message conversation", messages.len());
        Ok(ChatMessage::assistant(MOCK_RESPONSE))
    }
}
