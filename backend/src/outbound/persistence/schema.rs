//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly.

diesel::table! {
    /// Contact-form submissions, append-only.
    contacts (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        message -> Text,
        /// Assigned by the database on insert.
        submitted_at -> Timestamptz,
    }
}

diesel::table! {
    /// Saved places. `name` carries a unique constraint.
    favourites (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        /// Assigned by the database on insert.
        added_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(contacts, favourites);
