//! Repository layer for thing persistence.
//!
//! [`ThingRepository`] is the access contract: the generic create, read and
//! delete operations plus the two single-field lookups. Implementations hold
//! no state of their own between calls beyond what their backing store owns.
//!
//! * [`crate::storage::LocalStorage`] - SeaORM over SQLite, built on [`ThingQueries`]
//! * [`MemoryThingRepository`] - in-process map, for hosts without a database

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::entities::{Thing, ThingDraft, ThingId};

pub mod memory;
pub mod thing;

pub use memory::MemoryThingRepository;
pub use thing::ThingQueries;

/// Errors surfaced by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: DbErr,
    },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("No id left to assign after {last}")]
    IdSpaceExhausted { last: ThingId },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Access contract for things.
///
/// A lookup that matches nothing is not a failure: `find_by_id` yields `None`
/// and the list operations yield an empty vector.
#[async_trait]
pub trait ThingRepository: Send + Sync {
    /// Insert a draft without id, or write the row addressed by its id.
    async fn save(&self, thing: ThingDraft) -> Result<Thing>;

    async fn find_by_id(&self, id: ThingId) -> Result<Option<Thing>>;

    async fn find_all(&self) -> Result<Vec<Thing>>;

    /// Returns whether a row was removed. Unknown ids are a no-op.
    async fn delete_by_id(&self, id: ThingId) -> Result<bool>;

    /// Things whose shape equals `shape` exactly (case-sensitive).
    async fn find_by_shape(&self, shape: &str) -> Result<Vec<Thing>>;

    /// Things whose color equals `color` exactly (case-sensitive).
    async fn find_by_color(&self, color: &str) -> Result<Vec<Thing>>;
}

/// Bulk and convenience operations layered over [`ThingRepository`].
///
/// Every method has a default written in terms of the core operations;
/// stores that can do better in a single statement override them.
#[async_trait]
pub trait ThingRepositoryExt: ThingRepository {
    /// Save each draft in order.
    async fn save_all(&self, things: Vec<ThingDraft>) -> Result<Vec<Thing>> {
        let mut saved = Vec::with_capacity(things.len());
        for thing in things {
            saved.push(self.save(thing).await?);
        }
        Ok(saved)
    }

    /// Unknown ids are skipped.
    async fn find_all_by_id(&self, ids: &[ThingId]) -> Result<Vec<Thing>> {
        let mut found = Vec::new();
        for id in ids {
            if let Some(thing) = self.find_by_id(*id).await? {
                found.push(thing);
            }
        }
        found.sort_by_key(|thing| thing.id);
        found.dedup_by_key(|thing| thing.id);
        Ok(found)
    }

    async fn exists_by_id(&self, id: ThingId) -> Result<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.find_all().await?.len() as u64)
    }

    async fn delete(&self, thing: &Thing) -> Result<bool> {
        self.delete_by_id(thing.id).await
    }

    /// Returns the number of rows removed.
    async fn delete_all_by_id(&self, ids: &[ThingId]) -> Result<u64> {
        let mut removed = 0;
        for id in ids {
            if self.delete_by_id(*id).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Returns the number of rows removed.
    async fn delete_all(&self) -> Result<u64> {
        let ids: Vec<ThingId> = self.find_all().await?.into_iter().map(|thing| thing.id).collect();
        self.delete_all_by_id(&ids).await
    }
}
