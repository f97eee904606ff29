use async_trait::async_trait;

use crate::errors::Result;
use crate::knowledge::{KnowledgeItem, NewKnowledgeItem};

/// Trait for knowledge item repository operations
#[async_trait]
pub trait KnowledgeRepositoryTrait: Send + Sync {
    async fn insert(&self, item: KnowledgeItem) -> Result<KnowledgeItem>;
    fn get(&self, item_id: &str) -> Result<Option<KnowledgeItem>>;
    /// All items, newest first.
    fn list(&self) -> Result<Vec<KnowledgeItem>>;
    /// Returns the number of rows removed.
    async fn delete(&self, item_id: &str) -> Result<usize>;
}

/// Trait for knowledge service operations
#[async_trait]
pub trait KnowledgeServiceTrait: Send + Sync {
    async fn create_item(&self, new_item: NewKnowledgeItem) -> Result<KnowledgeItem>;
    fn get_item(&self, item_id: &str) -> Result<Option<KnowledgeItem>>;
    fn list_items(&self) -> Result<Vec<KnowledgeItem>>;
    async fn delete_item(&self, item_id: &str) -> Result<bool>;
}
