//! OdinView AI - conversational request/response flow.
//!
//! No model provider is called yet. The chat service checks that provider keys
//! are configured, waits for a simulated latency and answers with a fixed
//! assistant message.
//!
//! - `chat`: [`ChatService`] and its [`ChatConfig`]
//! - `types`: message DTOs shared with the HTTP layer
//! - `error`: [`AiError`]

pub mod chat;
pub mod error;
pub mod types;

pub use chat::{ChatConfig, ChatService, MOCK_RESPONSE};
pub use error::AiError;
pub use types::{ChatMessage, ChatMessageRole, ChatRequest};
