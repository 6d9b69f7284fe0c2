//! Builders wiring Diesel repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use travel_backend::domain::{ContactService, FavouritesService};
use travel_backend::inbound::http::state::HttpState;
use travel_backend::outbound::persistence::{
    DbPool, DieselContactRepository, DieselFavouriteRepository,
};

/// Build HTTP state backed by the PostgreSQL repositories.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let contacts = Arc::new(ContactService::new(Arc::new(DieselContactRepository::new(
        pool.clone(),
    ))));
    let favourites = Arc::new(FavouritesService::new(Arc::new(
        DieselFavouriteRepository::new(pool.clone()),
    )));
    web::Data::new(HttpState::new(
        contacts.clone(),
        contacts,
        favourites.clone(),
        favourites,
    ))
}
