//! OpenAPI schema definitions for failure envelopes.
//!
//! The domain `Error` does not derive `ToSchema`; the HTTP adapter renders it
//! as one of the shapes below (see `error.rs`). These wrappers exist only for
//! documentation.

use utoipa::ToSchema;

/// OpenAPI schema for a failure carrying a single message.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message returned to clients.
    #[schema(example = "Server error while saving favourite.")]
    message: String,
}

/// OpenAPI schema for a contact validation failure.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationErrorSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// One message per violated rule, in field order.
    #[schema(example = json!(["Name is required.", "A valid email is required."]))]
    errors: Vec<String>,
}
