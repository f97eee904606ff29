use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::knowledge_traits::{KnowledgeRepositoryTrait, KnowledgeServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::knowledge::{created_at_now, KnowledgeItem, NewKnowledgeItem};

pub struct KnowledgeService {
    repository: Arc<dyn KnowledgeRepositoryTrait>,
}

impl KnowledgeService {
    pub fn new(repository: Arc<dyn KnowledgeRepositoryTrait>) -> Self {
        KnowledgeService { repository }
    }
}

#[async_trait]
impl KnowledgeServiceTrait for KnowledgeService {
    async fn create_item(&self, new_item: NewKnowledgeItem) -> Result<KnowledgeItem> {
        let source = new_item.source.trim();
        if source.is_empty() {
            return Err(ValidationError::MissingField("source".to_string()).into());
        }

        let id = new_item
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let item = KnowledgeItem {
            id,
            item_type: new_item.item_type,
            source: source.to_string(),
            content: new_item.content,
            embedding: new_item.embedding,
            created_at: created_at_now(),
        };
        debug!("Creating {} knowledge item {}", item.item_type, item.id);
        self.repository.insert(item).await
    }

    fn get_item(&self, item_id: &str) -> Result<Option<KnowledgeItem>> {
        self.repository.get(item_id)
    }

    fn list_items(&self) -> Result<Vec<KnowledgeItem>> {
        self.repository.list()
    }

    async fn delete_item(&self, item_id: &str) -> Result<bool> {
        Ok(self.repository.delete(item_id).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::knowledge::KnowledgeItemType;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockKnowledgeRepository {
        items: Mutex<Vec<KnowledgeItem>>,
    }

    #[async_trait]
    impl KnowledgeRepositoryTrait for MockKnowledgeRepository {
        async fn insert(&self, item: KnowledgeItem) -> Result<KnowledgeItem> {
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        fn get(&self, item_id: &str) -> Result<Option<KnowledgeItem>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == item_id)
                .cloned())
        }

        fn list(&self) -> Result<Vec<KnowledgeItem>> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn delete(&self, item_id: &str) -> Result<usize> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|i| i.id != item_id);
            Ok(before - items.len())
        }
    }

    fn note(id: Option<&str>, source: &str) -> NewKnowledgeItem {
        NewKnowledgeItem {
            id: id.map(str::to_string),
            item_type: KnowledgeItemType::Note,
            source: source.to_string(),
            content: Some("remember this".to_string()),
            embedding: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_when_missing() {
        let service = KnowledgeService::new(Arc::new(MockKnowledgeRepository::default()));

        let created = service.create_item(note(None, "scratchpad")).await.unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.source, "scratchpad");
        assert!(chrono::DateTime::parse_from_rfc3339(&created.created_at).is_ok());
        assert_eq!(created.created_at.len(), "2025-03-01T10:00:00.000Z".len());
        assert!(created.created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn create_keeps_caller_id() {
        let service = KnowledgeService::new(Arc::new(MockKnowledgeRepository::default()));

        let created = service
            .create_item(note(Some("note-1"), "  scratchpad  "))
            .await
            .unwrap();

        assert_eq!(created.id, "note-1");
        assert_eq!(created.source, "scratchpad");
        assert_eq!(service.get_item("note-1").unwrap(), Some(created));
    }

    #[tokio::test]
    async fn create_rejects_blank_source() {
        let service = KnowledgeService::new(Arc::new(MockKnowledgeRepository::default()));

        let err = service.create_item(note(None, "   ")).await.unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref field)) if field == "source"
        ));
        assert!(service.list_items().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_missing_items() {
        let service = KnowledgeService::new(Arc::new(MockKnowledgeRepository::default()));
        service.create_item(note(Some("n1"), "a")).await.unwrap();

        assert!(service.delete_item("n1").await.unwrap());
        assert!(!service.delete_item("n1").await.unwrap());
    }
}
