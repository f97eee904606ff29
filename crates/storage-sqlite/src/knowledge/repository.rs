use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use odinview_core::knowledge::{KnowledgeItem, KnowledgeRepositoryTrait};
use odinview_core::Result;

use super::model::KnowledgeItemDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::knowledge_items;
use crate::schema::knowledge_items::dsl::*;

pub struct KnowledgeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl KnowledgeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        KnowledgeRepository { pool, writer }
    }
}

#[async_trait]
impl KnowledgeRepositoryTrait for KnowledgeRepository {
    async fn insert(&self, item: KnowledgeItem) -> Result<KnowledgeItem> {
        let row = KnowledgeItemDB::from(item);
        debug!("Inserting knowledge item {}", row.id);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<KnowledgeItem> {
                let inserted = diesel::insert_into(knowledge_items::table)
                    .values(&row)
                    .returning(KnowledgeItemDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                KnowledgeItem::try_from(inserted)
            })
            .await
    }

    fn get(&self, item_id: &str) -> Result<Option<KnowledgeItem>> {
        let mut conn = get_connection(&self.pool)?;
        knowledge_items
            .find(item_id)
            .select(KnowledgeItemDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .map(KnowledgeItem::try_from)
            .transpose()
    }

    fn list(&self) -> Result<Vec<KnowledgeItem>> {
        let mut conn = get_connection(&self.pool)?;
        knowledge_items
            .select(KnowledgeItemDB::as_select())
            .order((created_at.desc(), id.desc()))
            .load(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(KnowledgeItem::try_from)
            .collect()
    }

    async fn delete(&self, item_id: &str) -> Result<usize> {
        let item_id_owned = item_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(knowledge_items.find(item_id_owned))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
