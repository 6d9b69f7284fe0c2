//! PostgreSQL-backed `FavouriteRepository` implementation using Diesel ORM.
//!
//! The `favourites.name` unique index backs duplicate detection: a violating
//! insert surfaces as [`FavouriteRepositoryError::DuplicateName`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{FavouriteRepository, FavouriteRepositoryError};
use crate::domain::{Favourite, FavouriteDraft, FavouriteId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{FavouriteRow, NewFavouriteRow};
use super::pool::{DbPool, PoolError};
use super::schema::favourites;

/// Diesel-backed implementation of the `FavouriteRepository` port.
#[derive(Clone)]
pub struct DieselFavouriteRepository {
    pool: DbPool,
}

impl DieselFavouriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FavouriteRepositoryError {
    map_basic_pool_error(error, FavouriteRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FavouriteRepositoryError {
    map_basic_diesel_error(
        error,
        FavouriteRepositoryError::query,
        FavouriteRepositoryError::connection,
    )
}

#[async_trait]
impl FavouriteRepository for DieselFavouriteRepository {
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Favourite>, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<FavouriteRow> = favourites::table
            .filter(favourites::name.eq(name))
            .select(FavouriteRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Favourite::from))
    }

    async fn insert(&self, draft: &FavouriteDraft) -> Result<Favourite, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFavouriteRow {
            id: Uuid::new_v4(),
            name: draft.name(),
            description: draft.description(),
        };

        diesel::insert_into(favourites::table)
            .values(&new_row)
            .returning(FavouriteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Favourite::from)
            .map_err(|error| {
                if is_unique_violation(&error) {
                    FavouriteRepositoryError::duplicate_name(draft.name())
                } else {
                    map_diesel_error(error)
                }
            })
    }

    async fn delete(&self, id: &FavouriteId) -> Result<bool, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(favourites::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn list_newest_first(&self) -> Result<Vec<Favourite>, FavouriteRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavouriteRow> = favourites::table
            .select(FavouriteRow::as_select())
            .order(favourites::added_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Favourite::from).collect())
    }
}
