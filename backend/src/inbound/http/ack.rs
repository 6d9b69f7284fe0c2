//! Success envelope shared by mutating endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{success:true, message}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Added to Favourites!")]
    pub message: String,
}

impl AckResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
