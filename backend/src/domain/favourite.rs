//! Saved places ("favourites").
//!
//! At most one favourite may exist per exact `name`. The store enforces this
//! with a unique constraint; the service additionally checks before insert.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Raised when a favourite submission lacks a name or description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavouriteValidationError;

impl fmt::Display for FavouriteValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name and description are required.")
    }
}

impl std::error::Error for FavouriteValidationError {}

/// Validated favourite awaiting persistence.
///
/// ## Invariants
/// - `name` and `description` are present and non-empty. They are stored as
///   given, whitespace included, so duplicate detection matches names exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouriteDraft {
    name: String,
    description: String,
}

impl FavouriteDraft {
    /// Validate raw submission fields.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::FavouriteDraft;
    ///
    /// let draft = FavouriteDraft::try_new(Some("Paris"), Some("City of lights"))
    ///     .expect("valid favourite");
    /// assert_eq!(draft.name(), "Paris");
    /// assert!(FavouriteDraft::try_new(Some("Paris"), None).is_err());
    /// ```
    pub fn try_new(
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Self, FavouriteValidationError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|text| !text.is_empty())
        }

        match (present(name), present(description)) {
            (Some(name), Some(description)) => Ok(Self {
                name: name.to_owned(),
                description: description.to_owned(),
            }),
            _ => Err(FavouriteValidationError),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Favourite identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavouriteId(Uuid);

impl FavouriteId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for FavouriteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for FavouriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted favourite place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favourite {
    pub id: FavouriteId,
    pub name: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
}
