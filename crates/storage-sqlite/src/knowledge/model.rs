//! Database models for knowledge items.

use diesel::prelude::*;

use odinview_core::errors::Error;
use odinview_core::knowledge::{KnowledgeItem, KnowledgeItemType};

/// Database model for knowledge items
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::knowledge_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct KnowledgeItemDB {
    pub id: String,
    pub item_type: String,
    pub source: String,
    pub content: Option<String>,
    pub embedding: Option<Vec<u8>>,
    pub created_at: String,
}

impl From<KnowledgeItem> for KnowledgeItemDB {
    fn from(item: KnowledgeItem) -> Self {
        Self {
            id: item.id,
            item_type: item.item_type.as_str().to_string(),
            source: item.source,
            content: item.content,
            embedding: item.embedding,
            created_at: item.created_at,
        }
    }
}

// A row written by another tool may carry a type this build does not know.
impl TryFrom<KnowledgeItemDB> for KnowledgeItem {
    type Error = Error;

    fn try_from(db: KnowledgeItemDB) -> Result<Self, Self::Error> {
        Ok(Self {
            item_type: db.item_type.parse::<KnowledgeItemType>()?,
            id: db.id,
            source: db.source,
            content: db.content,
            embedding: db.embedding,
            created_at: db.created_at,
        })
    }
}
