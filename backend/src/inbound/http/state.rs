//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, ContactQuery, FavouritesCommand, FavouritesQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactCommand>,
    pub contacts_query: Arc<dyn ContactQuery>,
    pub favourites: Arc<dyn FavouritesCommand>,
    pub favourites_query: Arc<dyn FavouritesQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use travel_backend::domain::{ContactService, FavouritesService};
    /// use travel_backend::inbound::http::state::HttpState;
    /// use travel_backend::test_support::{InMemoryContactRepository, InMemoryFavouriteRepository};
    ///
    /// let contacts = Arc::new(ContactService::new(Arc::new(InMemoryContactRepository::default())));
    /// let favourites = Arc::new(FavouritesService::new(Arc::new(
    ///     InMemoryFavouriteRepository::default(),
    /// )));
    /// let state = HttpState::new(contacts.clone(), contacts, favourites.clone(), favourites);
    /// let _query = state.favourites_query.clone();
    /// ```
    pub fn new(
        contacts: Arc<dyn ContactCommand>,
        contacts_query: Arc<dyn ContactQuery>,
        favourites: Arc<dyn FavouritesCommand>,
        favourites_query: Arc<dyn FavouritesQuery>,
    ) -> Self {
        Self {
            contacts,
            contacts_query,
            favourites,
            favourites_query,
        }
    }
}
