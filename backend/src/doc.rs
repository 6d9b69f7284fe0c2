//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer (contact,
//! favourites, health) together with the request, response and failure
//! envelope schemas. The document backs Swagger UI (debug builds) and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::ack::AckResponse;
use crate::inbound::http::contact::{ContactRequest, ContactResponse};
use crate::inbound::http::favourites::{FavouriteRequest, FavouriteResponse};
use crate::inbound::http::schemas::{ErrorSchema, ValidationErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel backend API",
        description = "Contact form submissions, saved favourite places, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::contact::list_submissions,
        crate::inbound::http::favourites::add_favourite,
        crate::inbound::http::favourites::list_favourites,
        crate::inbound::http::favourites::delete_favourite,
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AckResponse,
        ContactRequest,
        ContactResponse,
        FavouriteRequest,
        FavouriteResponse,
        ErrorSchema,
        ValidationErrorSchema
    )),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "favourites", description = "Saved favourite places"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
