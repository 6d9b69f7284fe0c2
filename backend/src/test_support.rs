//! In-memory adapters for tests.
//!
//! These repositories implement the driven ports without a database so HTTP
//! handlers and services can be exercised end to end in unit tests (in
//! `src/`) and integration tests (in `tests/`). Compiled for tests and under
//! the `test-support` feature.
//!
//! Timestamps are strictly increasing per repository so newest-first
//! ordering is deterministic even when inserts land within one clock tick.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, FavouriteRepository, FavouriteRepositoryError,
};
use crate::domain::{
    Contact, ContactDraft, ContactId, ContactService, Favourite, FavouriteDraft, FavouriteId,
    FavouritesService,
};
use crate::inbound::http::state::HttpState;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|err| err.into_inner())
}

/// Monotonic clock handing out strictly increasing instants.
#[derive(Debug, Default)]
struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last = Some(next);
        next
    }
}

#[derive(Debug, Default)]
struct ContactStore {
    rows: Vec<Contact>,
    clock: MonotonicClock,
    unavailable: bool,
}

/// Contact repository backed by a `Vec`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactRepository {
    inner: Arc<Mutex<ContactStore>>,
}

impl InMemoryContactRepository {
    /// Make every subsequent operation fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        lock(&self.inner).unavailable = unavailable;
    }

    /// Number of stored submissions.
    pub fn len(&self) -> usize {
        lock(&self.inner).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn contact_store_down() -> ContactRepositoryError {
    ContactRepositoryError::connection("in-memory contact store marked unavailable")
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, draft: &ContactDraft) -> Result<Contact, ContactRepositoryError> {
        let mut store = lock(&self.inner);
        if store.unavailable {
            return Err(contact_store_down());
        }
        let contact = Contact {
            id: ContactId::random(),
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
            message: draft.message().to_owned(),
            submitted_at: store.clock.tick(),
        };
        store.rows.push(contact.clone());
        Ok(contact)
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let store = lock(&self.inner);
        if store.unavailable {
            return Err(contact_store_down());
        }
        let mut rows = store.rows.clone();
        rows.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(rows)
    }
}

#[derive(Debug, Default)]
struct FavouriteStore {
    rows: Vec<Favourite>,
    clock: MonotonicClock,
    unavailable: bool,
}

/// Favourite repository backed by a `Vec`, enforcing name uniqueness the
/// way the database's unique index does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFavouriteRepository {
    inner: Arc<Mutex<FavouriteStore>>,
}

impl InMemoryFavouriteRepository {
    /// Make every subsequent operation fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        lock(&self.inner).unavailable = unavailable;
    }

    /// Number of stored favourites.
    pub fn len(&self) -> usize {
        lock(&self.inner).rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count favourites with exactly this name.
    pub fn count_named(&self, name: &str) -> usize {
        lock(&self.inner)
            .rows
            .iter()
            .filter(|row| row.name == name)
            .count()
    }
}

fn favourite_store_down() -> FavouriteRepositoryError {
    FavouriteRepositoryError::connection("in-memory favourite store marked unavailable")
}

#[async_trait]
impl FavouriteRepository for InMemoryFavouriteRepository {
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Favourite>, FavouriteRepositoryError> {
        let store = lock(&self.inner);
        if store.unavailable {
            return Err(favourite_store_down());
        }
        Ok(store.rows.iter().find(|row| row.name == name).cloned())
    }

    async fn insert(&self, draft: &FavouriteDraft) -> Result<Favourite, FavouriteRepositoryError> {
        let mut store = lock(&self.inner);
        if store.unavailable {
            return Err(favourite_store_down());
        }
        if store.rows.iter().any(|row| row.name == draft.name()) {
            return Err(FavouriteRepositoryError::duplicate_name(draft.name()));
        }
        let favourite = Favourite {
            id: FavouriteId::random(),
            name: draft.name().to_owned(),
            description: draft.description().to_owned(),
            added_at: store.clock.tick(),
        };
        store.rows.push(favourite.clone());
        Ok(favourite)
    }

    async fn delete(&self, id: &FavouriteId) -> Result<bool, FavouriteRepositoryError> {
        let mut store = lock(&self.inner);
        if store.unavailable {
            return Err(favourite_store_down());
        }
        let before = store.rows.len();
        store.rows.retain(|row| row.id != *id);
        Ok(store.rows.len() < before)
    }

    async fn list_newest_first(&self) -> Result<Vec<Favourite>, FavouriteRepositoryError> {
        let store = lock(&self.inner);
        if store.unavailable {
            return Err(favourite_store_down());
        }
        let mut rows = store.rows.clone();
        rows.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(rows)
    }
}

/// HTTP state wired to fresh in-memory repositories.
///
/// Returns the repositories alongside the state so tests can inspect stored
/// records or simulate outages.
pub fn in_memory_http_state() -> (
    HttpState,
    InMemoryContactRepository,
    InMemoryFavouriteRepository,
) {
    let contacts_repo = InMemoryContactRepository::default();
    let favourites_repo = InMemoryFavouriteRepository::default();
    let contacts = Arc::new(ContactService::new(Arc::new(contacts_repo.clone())));
    let favourites = Arc::new(FavouritesService::new(Arc::new(favourites_repo.clone())));
    let state = HttpState::new(contacts.clone(), contacts, favourites.clone(), favourites);
    (state, contacts_repo, favourites_repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_strictly_increasing() {
        let mut clock = MonotonicClock::default();
        let first = clock.tick();
        let second = clock.tick();
        let third = clock.tick();
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn favourite_repository_rejects_duplicate_names() {
        let repo = InMemoryFavouriteRepository::default();
        let draft = FavouriteDraft::try_new(Some("Paris"), Some("City")).expect("valid");
        repo.insert(&draft).await.expect("first insert");

        let err = repo.insert(&draft).await.expect_err("duplicate");
        assert!(matches!(err, FavouriteRepositoryError::DuplicateName { .. }));
        assert_eq!(repo.count_named("Paris"), 1);
    }
}
