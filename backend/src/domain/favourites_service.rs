//! Favourites domain service.
//!
//! Implements the favourites driving ports on top of a
//! [`FavouriteRepository`]. Name uniqueness is checked before insert and the
//! adapter's unique-constraint signal is mapped to the same conflict, so two
//! racing requests for one name cannot both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    FavouriteRepository, FavouriteRepositoryError, FavouritesCommand, FavouritesQuery,
};
use crate::domain::{Error, Favourite, FavouriteDraft, FavouriteId};

pub(crate) const DUPLICATE_MESSAGE: &str = "This place is already in your favourites.";
pub(crate) const SAVE_FAILED_MESSAGE: &str = "Server error while saving favourite.";
pub(crate) const DELETE_FAILED_MESSAGE: &str = "Server error while deleting favourite.";
pub(crate) const LIST_FAILED_MESSAGE: &str = "Server error while fetching favourites.";

fn store_failure(error: &FavouriteRepositoryError, operation: &'static str, message: &str) -> Error {
    error!(%operation, %error, "favourite store operation failed");
    Error::internal(message)
}

/// Favourites service implementing [`FavouritesCommand`] and [`FavouritesQuery`].
#[derive(Clone)]
pub struct FavouritesService<R> {
    favourites: Arc<R>,
}

impl<R> FavouritesService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(favourites: Arc<R>) -> Self {
        Self { favourites }
    }
}

#[async_trait]
impl<R> FavouritesCommand for FavouritesService<R>
where
    R: FavouriteRepository,
{
    async fn add(&self, draft: FavouriteDraft) -> Result<Favourite, Error> {
        let existing = self
            .favourites
            .find_by_name(draft.name())
            .await
            .map_err(|err| store_failure(&err, "find favourite by name", SAVE_FAILED_MESSAGE))?;
        if existing.is_some() {
            debug!(name = draft.name(), "favourite already present");
            return Err(Error::conflict(DUPLICATE_MESSAGE));
        }

        match self.favourites.insert(&draft).await {
            Ok(favourite) => {
                info!(favourite_id = %favourite.id, "favourite added");
                Ok(favourite)
            }
            Err(FavouriteRepositoryError::DuplicateName { name }) => {
                debug!(%name, "favourite inserted concurrently");
                Err(Error::conflict(DUPLICATE_MESSAGE))
            }
            Err(err) => Err(store_failure(&err, "insert favourite", SAVE_FAILED_MESSAGE)),
        }
    }

    async fn remove(&self, id: &FavouriteId) -> Result<(), Error> {
        let removed = self
            .favourites
            .delete(id)
            .await
            .map_err(|err| store_failure(&err, "delete favourite", DELETE_FAILED_MESSAGE))?;
        if removed {
            info!(favourite_id = %id, "favourite deleted");
        } else {
            debug!(favourite_id = %id, "no favourite matched delete");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> FavouritesQuery for FavouritesService<R>
where
    R: FavouriteRepository,
{
    async fn list_favourites(&self) -> Result<Vec<Favourite>, Error> {
        self.favourites
            .list_newest_first()
            .await
            .map_err(|err| store_failure(&err, "list favourites", LIST_FAILED_MESSAGE))
    }
}

#[cfg(test)]
#[path = "favourites_service_tests.rs"]
mod tests;
