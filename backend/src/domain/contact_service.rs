//! Contact submission domain service.
//!
//! Implements the contact driving ports on top of a [`ContactRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{ContactCommand, ContactQuery, ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDraft, Error};

pub(crate) const SUBMIT_FAILED_MESSAGE: &str = "Server error, please try again.";
pub(crate) const LIST_FAILED_MESSAGE: &str = "Server error while fetching submissions.";

fn log_repository_error(error: &ContactRepositoryError, operation: &'static str) {
    match error {
        ContactRepositoryError::Connection { message } => {
            error!(%operation, %message, "contact store unreachable");
        }
        ContactRepositoryError::Query { message } => {
            error!(%operation, %message, "contact store operation failed");
        }
    }
}

/// Contact service implementing [`ContactCommand`] and [`ContactQuery`].
#[derive(Clone)]
pub struct ContactService<R> {
    contacts: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(contacts: Arc<R>) -> Self {
        Self { contacts }
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn submit(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let contact = self.contacts.insert(&draft).await.map_err(|err| {
            log_repository_error(&err, "insert contact");
            Error::internal(SUBMIT_FAILED_MESSAGE)
        })?;
        info!(contact_id = %contact.id, "contact submission stored");
        Ok(contact)
    }
}

#[async_trait]
impl<R> ContactQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_submissions(&self) -> Result<Vec<Contact>, Error> {
        self.contacts.list_newest_first().await.map_err(|err| {
            log_repository_error(&err, "list contacts");
            Error::internal(LIST_FAILED_MESSAGE)
        })
    }
}
