//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Contact, ContactId, Favourite, FavouriteId};

use super::schema::{contacts, favourites};

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Insertable struct for new contact records; `submitted_at` is defaulted
/// by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            submitted_at: row.submitted_at,
        }
    }
}

/// Row struct for reading from the favourites table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = favourites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavouriteRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
}

/// Insertable struct for new favourite records; `added_at` is defaulted by
/// the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favourites)]
pub(crate) struct NewFavouriteRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
}

impl From<FavouriteRow> for Favourite {
    fn from(row: FavouriteRow) -> Self {
        Self {
            id: FavouriteId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            added_at: row.added_at,
        }
    }
}
