//! Driving port for reading contact-form submissions.

use async_trait::async_trait;

use crate::domain::{Contact, Error};

/// Domain use-case port for listing submissions newest first.
#[async_trait]
pub trait ContactQuery: Send + Sync {
    async fn list_submissions(&self) -> Result<Vec<Contact>, Error>;
}
