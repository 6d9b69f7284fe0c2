//! Port for favourite place persistence.
//!
//! Adapters must reject a second record with an existing `name` by
//! returning [`FavouriteRepositoryError::DuplicateName`], typically by
//! translating a unique-constraint violation raised by the store.

use async_trait::async_trait;

use crate::domain::{Favourite, FavouriteDraft, FavouriteId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by favourite repository adapters.
    pub enum FavouriteRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "favourite repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "favourite repository query failed: {message}",
        /// A favourite with the same name already exists.
        DuplicateName { name: String } => "favourite named {name} already exists",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouriteRepository: Send + Sync {
    /// Look up a favourite by exact name.
    async fn find_by_name(&self, name: &str)
    -> Result<Option<Favourite>, FavouriteRepositoryError>;

    /// Persist a new favourite; the store assigns `added_at`.
    async fn insert(&self, draft: &FavouriteDraft) -> Result<Favourite, FavouriteRepositoryError>;

    /// Delete by identifier, returning whether a record was removed.
    async fn delete(&self, id: &FavouriteId) -> Result<bool, FavouriteRepositoryError>;

    /// Return every favourite, most recent `added_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Favourite>, FavouriteRepositoryError>;
}
