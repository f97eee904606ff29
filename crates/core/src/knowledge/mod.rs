//! Knowledge module - locally stored files, URLs and notes.

mod knowledge_model;
mod knowledge_service;
mod knowledge_traits;

pub use knowledge_model::{created_at_now, KnowledgeItem, KnowledgeItemType, NewKnowledgeItem};
pub use knowledge_service::KnowledgeService;
pub use knowledge_traits::{KnowledgeRepositoryTrait, KnowledgeServiceTrait};
