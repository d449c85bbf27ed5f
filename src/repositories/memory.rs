//! In-memory thing repository.

use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::{RepositoryError, Result, ThingRepository, ThingRepositoryExt};
use crate::entities::{Thing, ThingDraft, ThingId};

#[derive(Clone, Default)]
struct Rows {
    things: BTreeMap<ThingId, Thing>,
    last_id: ThingId,
}

impl Rows {
    fn save(&mut self, thing: ThingDraft) -> Result<Thing> {
        let id = match thing.id {
            Some(id) => id,
            None => self
                .last_id
                .checked_add(1)
                .ok_or(RepositoryError::IdSpaceExhausted { last: self.last_id })?,
        };
        self.last_id = self.last_id.max(id);

        let saved = thing.into_model(id);
        self.things.insert(id, saved.clone());
        Ok(saved)
    }
}

/// Keeps things in a process-local map. Ids are handed out like an
/// autoincrement column: never reused, always above the highest id seen.
#[derive(Default)]
pub struct MemoryThingRepository {
    rows: RwLock<Rows>,
}

impl MemoryThingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn matching<F>(&self, predicate: F) -> Vec<Thing>
    where
        F: Fn(&Thing) -> bool,
    {
        let rows = self.rows.read().await;
        rows.things.values().filter(|thing| predicate(thing)).cloned().collect()
    }
}

#[async_trait]
impl ThingRepository for MemoryThingRepository {
    async fn save(&self, thing: ThingDraft) -> Result<Thing> {
        let saved = self.rows.write().await.save(thing)?;
        debug!("Saved thing {} in memory", saved.id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: ThingId) -> Result<Option<Thing>> {
        Ok(self.rows.read().await.things.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Thing>> {
        Ok(self.matching(|_| true).await)
    }

    async fn delete_by_id(&self, id: ThingId) -> Result<bool> {
        Ok(self.rows.write().await.things.remove(&id).is_some())
    }

    async fn find_by_shape(&self, shape: &str) -> Result<Vec<Thing>> {
        Ok(self.matching(|thing| thing.shape == shape).await)
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Thing>> {
        Ok(self.matching(|thing| thing.color == color).await)
    }
}

#[async_trait]
impl ThingRepositoryExt for MemoryThingRepository {
    /// Applied to a copy and swapped in only if every draft saved.
    async fn save_all(&self, things: Vec<ThingDraft>) -> Result<Vec<Thing>> {
        let mut rows = self.rows.write().await;
        let mut staged = rows.clone();

        let mut saved = Vec::with_capacity(things.len());
        for thing in things {
            saved.push(staged.save(thing)?);
        }

        *rows = staged;
        Ok(saved)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.rows.read().await.things.len() as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let removed = rows.things.len() as u64;
        rows.things.clear();
        Ok(removed)
    }
}
