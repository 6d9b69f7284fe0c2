//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters;
//! driving ports (`*Command`, `*Query`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_command;
mod contact_query;
mod contact_repository;
mod favourite_repository;
mod favourites_command;
mod favourites_query;

pub use contact_command::ContactCommand;
pub use contact_query::ContactQuery;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use favourite_repository::MockFavouriteRepository;
pub use favourite_repository::{FavouriteRepository, FavouriteRepositoryError};
pub use favourites_command::FavouritesCommand;
pub use favourites_query::FavouritesQuery;
