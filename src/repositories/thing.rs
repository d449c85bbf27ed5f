//! Thing queries for database operations.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use super::Result;
use crate::entities::{thing, ThingDraft, ThingId};

/// Stateless query functions for the `things` table.
///
/// Generic over [`ConnectionTrait`] so the same calls run on a pooled
/// connection or inside a transaction.
pub struct ThingQueries;

/// Ids bound per `IN (...)` clause, well under SQLite's bind-parameter limit.
pub const ID_CHUNK_SIZE: usize = 500;

impl ThingQueries {
    /// Get a single thing by id.
    pub async fn get_by_id<C>(conn: &C, id: ThingId) -> Result<Option<thing::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all things ordered by id.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<thing::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::find().order_by_asc(thing::Column::Id).all(conn).await?)
    }

    /// Get the things among `ids`, ordered by id.
    pub async fn get_many<C>(conn: &C, ids: &[ThingId]) -> Result<Vec<thing::Model>>
    where
        C: ConnectionTrait,
    {
        let mut found = Vec::new();
        for chunk in ids.chunks(ID_CHUNK_SIZE) {
            found.extend(
                thing::Entity::find()
                    .filter(thing::Column::Id.is_in(chunk.iter().copied()))
                    .all(conn)
                    .await?,
            );
        }
        found.sort_by_key(|thing| thing.id);
        found.dedup_by_key(|thing| thing.id);
        Ok(found)
    }

    /// Get things with exactly this shape.
    pub async fn get_by_shape<C>(conn: &C, shape: &str) -> Result<Vec<thing::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::find()
            .filter(thing::Column::Shape.eq(shape))
            .order_by_asc(thing::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get things with exactly this color.
    pub async fn get_by_color<C>(conn: &C, color: &str) -> Result<Vec<thing::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::find()
            .filter(thing::Column::Color.eq(color))
            .order_by_asc(thing::Column::Id)
            .all(conn)
            .await?)
    }

    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::find().count(conn).await?)
    }

    /// Insert a draft, or overwrite the row its id addresses.
    ///
    /// Either way this is a single write statement, so concurrent saves only
    /// ever queue for SQLite's write lock instead of upgrading a read lock.
    pub async fn upsert<C>(conn: &C, draft: ThingDraft) -> Result<thing::Model>
    where
        C: ConnectionTrait,
    {
        let Some(id) = draft.id else {
            return Ok(draft.into_active_model().insert(conn).await?);
        };

        thing::Entity::insert(draft.clone().into_active_model())
            .on_conflict(
                OnConflict::column(thing::Column::Id)
                    .update_columns([thing::Column::Shape, thing::Column::Color])
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        // The row now holds exactly the draft's values
        Ok(draft.into_model(id))
    }

    /// Delete a thing by id. Returns whether a row was removed.
    pub async fn delete_by_id<C>(conn: &C, id: ThingId) -> Result<bool>
    where
        C: ConnectionTrait,
    {
        let result = thing::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn delete_many<C>(conn: &C, ids: &[ThingId]) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let mut removed = 0;
        for chunk in ids.chunks(ID_CHUNK_SIZE) {
            removed += thing::Entity::delete_many()
                .filter(thing::Column::Id.is_in(chunk.iter().copied()))
                .exec(conn)
                .await?
                .rows_affected;
        }
        Ok(removed)
    }

    pub async fn delete_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(thing::Entity::delete_many().exec(conn).await?.rows_affected)
    }
}
