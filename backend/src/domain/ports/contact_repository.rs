//! Port for contact submission persistence.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
    }
}

/// Durable storage for contact submissions.
///
/// The store assigns the identifier and the `submitted_at` timestamp on
/// insert. Records are append-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a validated submission and return the stored record.
    async fn insert(&self, draft: &ContactDraft) -> Result<Contact, ContactRepositoryError>;

    /// Return every submission, most recent `submitted_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Contact>, ContactRepositoryError>;
}
