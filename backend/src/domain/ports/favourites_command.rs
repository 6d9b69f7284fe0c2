//! Driving port for mutating the favourites list.

use async_trait::async_trait;

use crate::domain::{Error, Favourite, FavouriteDraft, FavouriteId};

/// Domain use-case port for adding and removing favourites.
#[async_trait]
pub trait FavouritesCommand: Send + Sync {
    /// Add a favourite unless one with the same name exists.
    ///
    /// A duplicate name yields [`crate::domain::ErrorCode::Conflict`] and no
    /// write is performed.
    async fn add(&self, draft: FavouriteDraft) -> Result<Favourite, Error>;

    /// Remove a favourite. Removing an unknown identifier still succeeds.
    async fn remove(&self, id: &FavouriteId) -> Result<(), Error>;
}
