use async_trait::async_trait;
use log::debug;
use sea_orm::TransactionTrait;

use super::LocalStorage;
use crate::entities::{Thing, ThingDraft, ThingId};
use crate::repositories::{Result, ThingQueries, ThingRepository, ThingRepositoryExt};

#[async_trait]
impl ThingRepository for LocalStorage {
    async fn save(&self, thing: ThingDraft) -> Result<Thing> {
        let saved = ThingQueries::upsert(&self.conn, thing).await?;
        debug!("Saved thing {}", saved.id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: ThingId) -> Result<Option<Thing>> {
        ThingQueries::get_by_id(&self.conn, id).await
    }

    async fn find_all(&self) -> Result<Vec<Thing>> {
        ThingQueries::get_all(&self.conn).await
    }

    async fn delete_by_id(&self, id: ThingId) -> Result<bool> {
        let removed = ThingQueries::delete_by_id(&self.conn, id).await?;
        debug!("Delete thing {}: removed={}", id, removed);
        Ok(removed)
    }

    async fn find_by_shape(&self, shape: &str) -> Result<Vec<Thing>> {
        ThingQueries::get_by_shape(&self.conn, shape).await
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Thing>> {
        ThingQueries::get_by_color(&self.conn, color).await
    }
}

#[async_trait]
impl ThingRepositoryExt for LocalStorage {
    /// All drafts are written in one transaction; any failure rolls back the batch.
    async fn save_all(&self, things: Vec<ThingDraft>) -> Result<Vec<Thing>> {
        let txn = self.conn.begin().await?;

        let mut saved = Vec::with_capacity(things.len());
        for thing in things {
            saved.push(ThingQueries::upsert(&txn, thing).await?);
        }

        txn.commit().await?;
        debug!("Saved {} things", saved.len());
        Ok(saved)
    }

    async fn find_all_by_id(&self, ids: &[ThingId]) -> Result<Vec<Thing>> {
        ThingQueries::get_many(&self.conn, ids).await
    }

    async fn exists_by_id(&self, id: ThingId) -> Result<bool> {
        Ok(ThingQueries::get_by_id(&self.conn, id).await?.is_some())
    }

    async fn count(&self) -> Result<u64> {
        ThingQueries::count(&self.conn).await
    }

    /// Large id lists span several statements; they commit together.
    async fn delete_all_by_id(&self, ids: &[ThingId]) -> Result<u64> {
        let txn = self.conn.begin().await?;
        let removed = ThingQueries::delete_many(&txn, ids).await?;
        txn.commit().await?;
        Ok(removed)
    }

    async fn delete_all(&self) -> Result<u64> {
        let removed = ThingQueries::delete_all(&self.conn).await?;
        debug!("Deleted all things: removed={}", removed);
        Ok(removed)
    }
}
