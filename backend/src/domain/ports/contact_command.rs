//! Driving port for recording contact-form submissions.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, Error};

/// Domain use-case port for storing a contact submission.
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Persist a validated submission.
    ///
    /// Store failures surface as [`crate::domain::ErrorCode::InternalError`]
    /// with a client-safe message.
    async fn submit(&self, draft: ContactDraft) -> Result<Contact, Error>;
}
