//! Driving port for reading the favourites list.

use async_trait::async_trait;

use crate::domain::{Error, Favourite};

/// Domain use-case port for listing favourites newest first.
#[async_trait]
pub trait FavouritesQuery: Send + Sync {
    async fn list_favourites(&self) -> Result<Vec<Favourite>, Error>;
}
