//! Domain primitives, services, and ports.
//!
//! Purpose: define the travel app's entities (contact submissions and
//! favourite places), their validation rules, and the use-case services the
//! HTTP adapter drives. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - `Contact`, `ContactDraft`, `ContactValidationError`: contact form data.
//! - `Favourite`, `FavouriteDraft`, `FavouriteId`: saved places.
//! - `ContactService`, `FavouritesService`: driving-port implementations.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod contact;
mod contact_service;
pub mod error;
pub mod favourite;
mod favourites_service;
pub mod ports;
mod trace_id;

pub use self::contact::{Contact, ContactDraft, ContactId, ContactValidationError};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::favourite::{Favourite, FavouriteDraft, FavouriteId, FavouriteValidationError};
pub use self::favourites_service::FavouritesService;
pub(crate) use self::favourites_service::DELETE_FAILED_MESSAGE as FAVOURITE_DELETE_FAILED_MESSAGE;
pub use self::trace_id::TraceId;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
