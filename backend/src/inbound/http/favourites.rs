//! Favourite places HTTP handlers.
//!
//! ```text
//! POST   /favourites
//! GET    /favourites
//! DELETE /favourites/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{
    Error, FAVOURITE_DELETE_FAILED_MESSAGE, Favourite, FavouriteDraft, FavouriteId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ack::AckResponse;
use crate::inbound::http::body::RequestBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

pub const FAVOURITE_ADDED_MESSAGE: &str = "Added to Favourites!";
pub const FAVOURITE_DELETED_MESSAGE: &str = "Favourite deleted.";

/// Favourite payload. Both fields are required.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct FavouriteRequest {
    #[schema(example = "Paris")]
    pub name: Option<String>,
    #[schema(example = "City of lights")]
    pub description: Option<String>,
}

/// Stored favourite as listed by `GET /favourites`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// RFC 3339 timestamp assigned by the store.
    pub added_at: String,
}

impl From<Favourite> for FavouriteResponse {
    fn from(value: Favourite) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            added_at: value.added_at.to_rfc3339(),
        }
    }
}

fn parse_favourite_request(payload: FavouriteRequest) -> Result<FavouriteDraft, Error> {
    FavouriteDraft::try_new(payload.name.as_deref(), payload.description.as_deref())
        .map_err(|err| Error::invalid_request(err.to_string()))
}

fn parse_favourite_id(raw: &str) -> Result<FavouriteId, Error> {
    raw.parse::<FavouriteId>().map_err(|err| {
        error!(id = raw, error = %err, "favourite identifier is not a UUID");
        Error::internal(FAVOURITE_DELETE_FAILED_MESSAGE)
    })
}

/// Save a place unless one with the same name already exists.
#[utoipa::path(
    post,
    path = "/favourites",
    description = "Accepts JSON or URL-encoded form bodies.",
    request_body = FavouriteRequest,
    responses(
        (status = 201, description = "Favourite added", body = AckResponse),
        (status = 400, description = "Name or description missing", body = ErrorSchema),
        (status = 409, description = "Name already saved", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "addFavourite"
)]
#[post("/favourites")]
pub async fn add_favourite(
    state: web::Data<HttpState>,
    body: RequestBody<FavouriteRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_favourite_request(body.into_inner())?;
    state.favourites.add(draft).await?;
    Ok(HttpResponse::Created().json(AckResponse::ok(FAVOURITE_ADDED_MESSAGE)))
}

/// List every favourite, newest first.
#[utoipa::path(
    get,
    path = "/favourites",
    responses(
        (status = 200, description = "Favourites, newest first", body = [FavouriteResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "listFavourites"
)]
#[get("/favourites")]
pub async fn list_favourites(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<FavouriteResponse>>> {
    let favourites = state.favourites_query.list_favourites().await?;
    Ok(web::Json(
        favourites.into_iter().map(FavouriteResponse::from).collect(),
    ))
}

/// Delete a favourite. Unknown identifiers still succeed.
#[utoipa::path(
    delete,
    path = "/favourites/{id}",
    params(("id" = String, Path, description = "Favourite identifier (UUID)")),
    responses(
        (status = 200, description = "Favourite deleted (or already absent)", body = AckResponse),
        (status = 500, description = "Malformed identifier or store failure", body = ErrorSchema)
    ),
    tags = ["favourites"],
    operation_id = "deleteFavourite"
)]
#[delete("/favourites/{id}")]
pub async fn delete_favourite(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_favourite_id(&path.into_inner())?;
    state.favourites.remove(&id).await?;
    Ok(HttpResponse::Ok().json(AckResponse::ok(FAVOURITE_DELETED_MESSAGE)))
}

#[cfg(test)]
#[path = "favourites_tests.rs"]
mod tests;
